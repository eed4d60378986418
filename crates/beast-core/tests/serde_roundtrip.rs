#![cfg(feature = "serde")]

use beast_core::{BallState, CarState, ControlOutput, FieldInfo, GamePacket, MatchPhase, Vec3};

#[test]
fn game_packet_roundtrips_via_serde() {
    let packet = GamePacket {
        tick: 3,
        time: 1.5,
        match_phase: MatchPhase::Kickoff,
        cars: vec![CarState {
            team: 1,
            position: Vec3::new(256.0, 3840.0, 17.0),
            last_input: ControlOutput::NOOP.with_throttle(1.0).with_boost(true),
            ..CarState::default()
        }],
        ball: Some(BallState::default()),
        field: Some(FieldInfo::STANDARD),
    };

    let json = serde_json::to_string(&packet).expect("serialize packet");
    let roundtrip: GamePacket = serde_json::from_str(&json).expect("deserialize packet");
    assert_eq!(roundtrip, packet);
}

#[test]
fn sparse_packet_fills_defaults() {
    let packet: GamePacket =
        serde_json::from_str(r#"{"tick": 9, "match_phase": "Active"}"#).expect("deserialize");

    assert_eq!(packet.tick, 9);
    assert!(packet.cars.is_empty());
    assert!(packet.ball.is_none());
    assert!(packet.field.is_none());
}
