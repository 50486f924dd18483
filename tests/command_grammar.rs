// tests/command_grammar.rs
use tabletop_robot::{Command, Orientation, Pose};

#[test]
fn bare_verbs_parse() {
    assert_eq!(Command::parse("MOVE"), Some(Command::Move));
    assert_eq!(Command::parse("LEFT"), Some(Command::Left));
    assert_eq!(Command::parse("RIGHT"), Some(Command::Right));
    assert_eq!(Command::parse("REPORT"), Some(Command::Report));
}

#[test]
fn place_parses_its_payload() {
    assert_eq!(
        Command::parse("PLACE 1,2,EAST"),
        Some(Command::Place(Pose::new(1, 2, Orientation::East)))
    );
}

#[test]
fn place_accepts_negative_coordinates() {
    // Sign is the board's bounds check, not the grammar's.
    assert_eq!(
        Command::parse("PLACE -1,2,SOUTH"),
        Some(Command::Place(Pose::new(-1, 2, Orientation::South)))
    );
}

#[test]
fn place_requires_exactly_three_payload_fields() {
    for raw in [
        "PLACE",
        "PLACE 222",
        "PLACE 1,2",
        "PLACE 1,2,EAST,JUNK",
    ] {
        assert_eq!(Command::parse(raw), None, "{raw:?} should not parse");
    }
}

#[test]
fn place_requires_strict_base_10_integers() {
    for raw in [
        "PLACE T,T,T",
        "PLACE 1x,2,EAST",
        "PLACE 1.0,2,EAST",
        "PLACE 1, 2,EAST",
        "PLACE 0x1,2,EAST",
        "PLACE ,,",
    ] {
        assert_eq!(Command::parse(raw), None, "{raw:?} should not parse");
    }
}

#[test]
fn orientation_tokens_are_canonical_and_case_sensitive() {
    assert_eq!(Command::parse("PLACE 1,2,East"), None);
    assert_eq!(Command::parse("PLACE 1,2,north"), None);
    assert_eq!(Command::parse("PLACE 1,2,NORTHWEST"), None);
}

#[test]
fn verbs_are_case_sensitive() {
    assert_eq!(Command::parse("move"), None);
    assert_eq!(Command::parse("Place 1,2,EAST"), None);
}

#[test]
fn unknown_verbs_do_not_parse() {
    for raw in ["JUMP", "PLACE2 1,2,EAST", "", "   "] {
        assert_eq!(Command::parse(raw), None, "{raw:?} should not parse");
    }
}

#[test]
fn tokens_after_the_payload_are_ignored() {
    assert_eq!(Command::parse("MOVE now"), Some(Command::Move));
    assert_eq!(Command::parse("REPORT verbose"), Some(Command::Report));
    assert_eq!(
        Command::parse("PLACE 1,2,EAST extra"),
        Some(Command::Place(Pose::new(1, 2, Orientation::East)))
    );
}

#[test]
fn orientation_names_round_trip() {
    for orientation in Orientation::ALL {
        assert_eq!(
            Orientation::from_token(orientation.as_str()),
            Some(orientation)
        );
    }
}

#[test]
fn leading_whitespace_is_tolerated() {
    assert_eq!(Command::parse("  MOVE"), Some(Command::Move));
    assert_eq!(
        Command::parse("\tPLACE 0,0,NORTH"),
        Some(Command::Place(Pose::new(0, 0, Orientation::North)))
    );
}
