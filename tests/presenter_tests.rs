use torpedo::{
    ConsolePresenter, GameConfig, GameSession, GameSnapshot, GameStatus, Presenter,
    SHOT_BUDGET,
};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Presenter for Recorder {
    fn new_game(&mut self, snapshot: &GameSnapshot) {
        self.events.push(format!("new_game:{}", snapshot.remaining_shots));
    }
    fn first_shot(&mut self) {
        self.events.push("first_shot".into());
    }
    fn miss(&mut self, target: (usize, usize)) {
        self.events.push(format!("miss:{:?}", target));
    }
    fn hit(&mut self, _target: (usize, usize), ship: &'static str) {
        self.events.push(format!("hit:{}", ship));
    }
    fn sunk(&mut self, _target: (usize, usize), ship: &'static str) {
        self.events.push(format!("sunk:{}", ship));
    }
    fn ignored(&mut self, _target: (usize, usize)) {
        self.events.push("ignored".into());
    }
    fn game_over(&mut self, status: GameStatus) {
        self.events.push(format!("game_over:{:?}", status));
    }
}

fn seeded(seed: u64) -> GameSession {
    GameSession::with_seed(GameConfig::default(), seed).unwrap()
}

#[test]
fn test_dispatch_order() {
    let mut session = seeded(5);
    let mut recorder = Recorder::default();
    recorder.new_game(&session.snapshot());

    let water = (!session.board().ship_map()).iter_set_bits().next().unwrap();
    let prince: Vec<_> = session.board().ship(4).unwrap().cells().collect();

    recorder.present(&session.fire_at(water.0, water.1));
    recorder.present(&session.fire_at(water.0, water.1));
    for (r, c) in prince {
        recorder.present(&session.fire_at(r, c));
    }

    assert_eq!(
        recorder.events,
        vec![
            "new_game:30".to_string(),
            "first_shot".to_string(),
            format!("miss:{:?}", water),
            "ignored".to_string(),
            "hit:HMS Prince of Wales".to_string(),
            "sunk:HMS Prince of Wales".to_string(),
        ]
    );
}

#[test]
fn test_game_over_reported_once() {
    let mut session = seeded(6);
    let mut recorder = Recorder::default();
    let water: Vec<_> = (!session.board().ship_map()).iter_set_bits().collect();

    for &(r, c) in water.iter().take(SHOT_BUDGET as usize + 2) {
        recorder.present(&session.fire_at(r, c));
    }
    let over: Vec<_> = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("game_over"))
        .collect();
    assert_eq!(over, vec!["game_over:Lost"]);
    assert_eq!(recorder.events.last().unwrap(), "ignored");
}

#[test]
fn test_console_messages() {
    let mut session = seeded(7);
    let mut console = ConsolePresenter::new(Vec::new());
    console.new_game(&session.snapshot());

    let water = (!session.board().ship_map()).iter_set_bits().next().unwrap();
    console.present(&session.fire_at(water.0, water.1));
    let prince: Vec<_> = session.board().ship(4).unwrap().cells().collect();
    for (r, c) in prince {
        console.present(&session.fire_at(r, c));
    }
    console.present(&session.fire_at(0, 10));

    let text = String::from_utf8(console.into_inner()).unwrap();
    assert!(text.contains("Make your first move!"));
    assert!(text.contains("Yamato (5)"));
    assert!(text.contains("Miss!"));
    assert!(text.contains("Direct hit on HMS Prince of Wales!"));
    assert!(text.contains("HMS Prince of Wales has been sunk!"));
    assert!(text.contains("ships/prince.png"));
    assert!(text.contains("K1 is not a valid target."));
}

#[test]
fn test_console_victory_and_defeat_lines() {
    let mut console = ConsolePresenter::new(Vec::new());
    console.game_over(GameStatus::Won);
    console.game_over(GameStatus::InProgress);
    console.game_over(GameStatus::Lost);
    let text = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        text,
        "All enemy ships sunk! VICTORY!\nOut of torpedoes! Game Over.\n"
    );
}
