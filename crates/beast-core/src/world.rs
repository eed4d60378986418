use crate::{AgentId, BallState, CarState, GamePacket, MatchPhase, NotReady, Vec3};

/// Distance the home point sits in front of our own goal line.
pub const DEFAULT_HOME_OFFSET: f32 = 500.0;

/// Validated, read-only view of one tick.
///
/// Built fresh every tick from a [`GamePacket`]; nothing in the decision core mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    pub agent: AgentId,
    pub tick: u64,
    pub time: f32,
    pub my_car: CarState,
    pub ball: BallState,
    pub own_goal: Vec3,
    pub enemy_goal: Vec3,
    /// Home point on the field in front of our own goal.
    pub own_goal_field: Vec3,
    /// Sign of our own goal's y coordinate (-1 for blue, +1 for orange).
    pub team_sign: f32,
    pub is_kickoff: bool,
    pub match_ended: bool,
}

impl WorldState {
    pub fn from_packet(packet: &GamePacket, agent: AgentId) -> Result<Self, NotReady> {
        Self::from_packet_with_home(packet, agent, DEFAULT_HOME_OFFSET)
    }

    pub fn from_packet_with_home(
        packet: &GamePacket,
        agent: AgentId,
        home_offset: f32,
    ) -> Result<Self, NotReady> {
        let field = packet.field.ok_or(NotReady::FieldNotLoaded)?;
        let ball = packet.ball.ok_or(NotReady::NoBall)?;
        let my_car = *packet
            .cars
            .get(agent.index)
            .ok_or(NotReady::CarMissing { index: agent.index })?;

        let (own_goal, enemy_goal) = if agent.is_blue() {
            (field.blue_goal, field.orange_goal)
        } else {
            (field.orange_goal, field.blue_goal)
        };
        let team_sign = agent.team_sign();
        let own_goal_field = Vec3::new(own_goal.x, own_goal.y - team_sign * home_offset, 0.0);

        Ok(Self {
            agent,
            tick: packet.tick,
            time: packet.time,
            my_car,
            ball,
            own_goal,
            enemy_goal,
            own_goal_field,
            team_sign,
            is_kickoff: matches!(packet.match_phase, MatchPhase::Kickoff | MatchPhase::Countdown),
            match_ended: packet.match_phase == MatchPhase::Ended,
        })
    }

    pub fn car_to_ball(&self) -> Vec3 {
        self.ball.position - self.my_car.position
    }

    /// Ball is on the enemy half.
    pub fn is_offence(&self) -> bool {
        self.ball.position.y * self.team_sign < 0.0
    }
}
