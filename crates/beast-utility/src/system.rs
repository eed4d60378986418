use beast_core::{ConfigError, Exec, ExecError, ScoreError, WorldState};

use crate::{Choice, ChoiceKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilitySystemConfig {
    /// Bonus added to the previously selected choice's score.
    ///
    /// Keeps the selection from flickering between choices with near-equal scores. Cleared by
    /// [`UtilitySystem::reset`].
    pub previous_bias: f32,
}

impl Default for UtilitySystemConfig {
    fn default() -> Self {
        Self {
            previous_bias: 0.15,
        }
    }
}

impl UtilitySystemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.previous_bias.is_finite() || self.previous_bias < 0.0 {
            return Err(ConfigError::InvalidBias(self.previous_bias));
        }
        Ok(())
    }
}

/// Score of one choice on the last evaluation, bias included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceScore {
    pub key: ChoiceKey,
    pub score: f32,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub key: ChoiceKey,
    pub score: f32,
}

/// Utility arbitrator over a fixed set of choices.
///
/// Each evaluation scores every choice in registration order and selects the strictly highest
/// score, so ties go to the choice registered first. A choice that fails to score, or scores a
/// non-finite value, counts as `-inf` for that evaluation only.
pub struct UtilitySystem {
    choices: Vec<Box<dyn Choice>>,
    config: UtilitySystemConfig,
    current: Option<usize>,
    last_scores: Vec<ChoiceScore>,
}

impl UtilitySystem {
    pub fn new(choices: Vec<Box<dyn Choice>>) -> Result<Self, ConfigError> {
        if choices.is_empty() {
            return Err(ConfigError::NoChoices);
        }
        let last_scores = Vec::with_capacity(choices.len());
        Ok(Self {
            choices,
            config: UtilitySystemConfig::default(),
            current: None,
            last_scores,
        })
    }

    pub fn with_config(mut self, config: UtilitySystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &UtilitySystemConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ChoiceKey> + '_ {
        self.choices.iter().map(|c| c.key())
    }

    /// The choice selected by the last evaluation, unless reset since.
    pub fn current(&self) -> Option<ChoiceKey> {
        self.current.map(|i| self.choices[i].key())
    }

    pub fn last_scores(&self) -> &[ChoiceScore] {
        &self.last_scores
    }

    pub fn evaluate(&mut self, world: &WorldState) -> Option<Selection> {
        self.last_scores.clear();

        let mut best_idx: Option<usize> = None;
        let mut best_score = f32::NEG_INFINITY;

        for (i, choice) in self.choices.iter_mut().enumerate() {
            let mut score = score_choice(choice.as_mut(), world);
            if self.current == Some(i) && score.is_finite() {
                score += self.config.previous_bias;
            }

            self.last_scores.push(ChoiceScore {
                key: choice.key(),
                score,
                selected: false,
            });

            if score > best_score {
                best_score = score;
                best_idx = Some(i);
            }
        }

        if best_idx != self.current {
            if let Some(prev) = self.current {
                self.choices[prev].reset();
            }
            tracing::debug!(
                from = ?self.current.map(|i| self.choices[i].key().0),
                to = ?best_idx.map(|i| self.choices[i].key().0),
                "choice changed"
            );
        }
        self.current = best_idx;

        let best_idx = best_idx?;
        self.last_scores[best_idx].selected = true;
        Some(Selection {
            index: best_idx,
            key: self.choices[best_idx].key(),
            score: best_score,
        })
    }

    /// Run the choice at `index` (normally the one just returned by [`evaluate`](Self::evaluate)).
    pub fn exec(&mut self, index: usize, world: &WorldState) -> Result<Exec, ExecError> {
        let Some(choice) = self.choices.get_mut(index) else {
            return Err(ExecError::Failed(format!("no choice at index {index}")));
        };
        choice.exec(world)
    }

    /// Forget the current selection so the next evaluation starts unbiased.
    pub fn reset(&mut self) {
        if let Some(prev) = self.current.take() {
            self.choices[prev].reset();
        }
    }
}

fn score_choice(choice: &mut dyn Choice, world: &WorldState) -> f32 {
    let result = match choice.utility(world) {
        Ok(s) if s.is_finite() => Ok(s),
        Ok(s) => Err(ScoreError::NonFinite(s)),
        Err(err) => Err(err),
    };

    match result {
        Ok(s) => s,
        Err(err) => {
            tracing::warn!(choice = %choice.key(), error = %err, "scoring failed, treating as -inf");
            f32::NEG_INFINITY
        }
    }
}
