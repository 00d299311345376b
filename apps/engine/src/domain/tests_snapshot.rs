use crate::domain::fixtures::room_with_hands;
use crate::domain::snapshot::{serialize, HandCard};

fn room() -> crate::domain::state::Room {
    room_with_hands(
        [
            &["KH", "4H"],
            &["5D"],
            &["5H", "6H"],
            &["7D", "8D"],
            &["7H", "BJ"],
            &["9D", "10D"],
        ],
        0,
    )
}

#[test]
fn viewer_sees_own_cards_only() {
    let room = room();
    let ids: Vec<String> = room.players[2].hand.iter().map(|c| c.id.to_string()).collect();

    let own = serialize(&room, Some(2));
    assert!(own.players[2].hand.iter().all(|c| !c.is_hidden()));
    assert!(own.players[0].hand.iter().all(HandCard::is_hidden));

    let other = serialize(&room, Some(0));
    let json = serde_json::to_value(&other.players[2].hand).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": ids[0] }, { "id": ids[1] }])
    );
}

#[test]
fn no_viewer_hides_everything() {
    let snapshot = serialize(&room(), None);
    assert!(snapshot
        .players
        .iter()
        .flat_map(|p| p.hand.iter())
        .all(HandCard::is_hidden));
}

#[test]
fn visible_cards_carry_full_faces() {
    let snapshot = serialize(&room(), Some(4));
    let json = serde_json::to_value(&snapshot.players[4].hand[1]).unwrap();
    assert_eq!(json["rank"], "BJ");
    assert_eq!(json["suit"], "");
    assert_eq!(json["value"], 14);
    assert_eq!(json["is_wild"], true);
    assert_eq!(snapshot.players[4].team, crate::domain::rules::Team::A);
}

#[test]
fn snapshot_is_serializable() {
    let snapshot = serialize(&room(), Some(0));
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["status"], "playing");
    assert_eq!(json["players"].as_array().unwrap().len(), 6);
}
