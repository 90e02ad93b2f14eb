use wheel_core::{
    GameConfig, GameSession, Millis, RngOracle, SegmentId, SessionState, messages,
};
use wheel_runtime::{
    Cue, CueBank, Event, EventBus, LedgerEvent, PresentationAdapter, RouletteGame, SpinEvent,
    Topic,
};

/// Lands every spin on a fixed segment.
struct Forced(u32);

impl RngOracle for Forced {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }

    fn pick_index(&self, _seed: u64, _count: u32) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Cue(Cue),
    Message(String),
    Credits(u32),
    Selected(Option<SegmentId>),
    Result(SegmentId, bool),
    ResetHighlight,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    last_angle: f64,
}

impl Recorder {
    fn messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn cues_except_ticks(&self) -> Vec<Cue> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Cue(cue) if *cue != Cue::Tick => Some(*cue),
                _ => None,
            })
            .collect()
    }

    fn last_credits(&self) -> Option<u32> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Credits(credits) => Some(*credits),
            _ => None,
        })
    }
}

impl PresentationAdapter for Recorder {
    fn render(&mut self, angle: f64) {
        self.last_angle = angle;
    }

    fn play_cue(&mut self, cue: Cue) {
        self.calls.push(Call::Cue(cue));
    }

    fn set_message(&mut self, text: &str) {
        self.calls.push(Call::Message(text.to_string()));
    }

    fn set_credits(&mut self, credits: u32) {
        self.calls.push(Call::Credits(credits));
    }

    fn set_selected(&mut self, segment: Option<SegmentId>) {
        self.calls.push(Call::Selected(segment));
    }

    fn show_result(&mut self, segment: SegmentId, is_win: bool) {
        self.calls.push(Call::Result(segment, is_win));
    }

    fn reset_highlight(&mut self) {
        self.calls.push(Call::ResetHighlight);
    }
}

fn game_with_credits(win: u32, credits: u32) -> RouletteGame<Forced, Recorder> {
    let config = GameConfig::default();
    let session = GameSession::new(config.clone(), Forced(win), 7)
        .unwrap()
        .with_session(SessionState::new(&config).with_credits(credits));
    RouletteGame::new(session, Recorder::default(), EventBus::new()).with_cues(CueBank::all_ready())
}

/// Runs 16ms frames from `start` until the spin settles, returning the last frame time.
fn run_until_settled(game: &mut RouletteGame<Forced, Recorder>, start: Millis) -> Millis {
    let mut now = start;
    while game.session().is_spinning() {
        now = now + 16;
        game.frame(now);
    }
    now
}

#[test]
fn winning_bet_pays_eighty() {
    let mut game = game_with_credits(3, 100);
    let mut spins = game.events().subscribe(Topic::Spin);

    assert!(game.select_bet(SegmentId(3), Millis::ZERO));
    assert_eq!(game.session().credits(), 90);

    run_until_settled(&mut game, Millis::ZERO);

    assert_eq!(game.session().credits(), 170);
    let recorder = game.presenter();
    assert_eq!(recorder.cues_except_ticks(), [Cue::Click, Cue::Score]);
    assert_eq!(
        recorder.messages(),
        [messages::SPINNING, "MATCH! +80 CREDITS"]
    );
    assert!(recorder.calls.contains(&Call::Result(SegmentId(3), true)));
    assert_eq!(recorder.last_credits(), Some(170));

    let layout = game.session().layout();
    assert_eq!(
        layout.segment_under_pointer(recorder.last_angle),
        SegmentId(3)
    );

    let mut finished = None;
    while let Ok(event) = spins.try_recv() {
        if let Event::Spin(SpinEvent::Finished { outcome, credits, .. }) = event {
            finished = Some((outcome.is_win(), credits));
        }
    }
    assert_eq!(finished, Some((true, 170)));
}

#[test]
fn losing_last_bet_refills_after_delay() {
    let mut game = game_with_credits(5, 10);
    let mut ledger = game.events().subscribe(Topic::Ledger);

    assert!(game.select_bet(SegmentId(2), Millis::ZERO));
    assert_eq!(game.session().credits(), 0);

    let settled_at = run_until_settled(&mut game, Millis::ZERO);
    assert_eq!(game.session().credits(), 0);
    assert_eq!(
        game.presenter().messages(),
        [
            messages::SPINNING,
            messages::NO_MATCH,
            messages::OUT_OF_CREDITS
        ]
    );
    assert_eq!(
        game.presenter().cues_except_ticks(),
        [Cue::Click, Cue::Fail]
    );
    assert!(game.pending_reset().is_some());

    // Betting while broke is acknowledged but starts nothing.
    assert!(!game.select_bet(SegmentId(1), settled_at + 100));
    assert_eq!(game.session().credits(), 0);
    let last_selected = game.presenter().calls.iter().rev().find_map(|call| match call {
        Call::Selected(segment) => Some(*segment),
        _ => None,
    });
    assert_eq!(last_selected, Some(Some(SegmentId(1))));
    assert_eq!(game.presenter().cues_except_ticks().last(), Some(&Cue::Click));

    game.frame(settled_at + 1_999);
    assert_eq!(game.session().credits(), 0);

    game.frame(settled_at + 2_000);
    assert_eq!(game.session().credits(), 100);
    assert_eq!(game.presenter().last_credits(), Some(100));
    assert!(game.pending_reset().is_none());

    let mut saw_reset = false;
    while let Ok(event) = ledger.try_recv() {
        if let Event::Ledger(LedgerEvent::CreditsReset { credits, .. }) = event {
            assert_eq!(credits, 100);
            saw_reset = true;
        }
    }
    assert!(saw_reset);

    assert!(game.select_bet(SegmentId(1), settled_at + 2_016));
    assert_eq!(game.session().credits(), 90);
}

#[test]
fn selection_mid_spin_changes_nothing() {
    let mut game = game_with_credits(0, 100);
    game.select_bet(SegmentId(4), Millis::ZERO);
    game.frame(Millis(500));
    let calls_before = game.presenter().calls.len();

    assert!(!game.select_bet(SegmentId(6), Millis(516)));
    assert_eq!(game.presenter().calls.len(), calls_before);
    assert_eq!(game.session().selected(), Some(SegmentId(4)));
}

#[test]
fn idle_wheel_drifts_without_cues() {
    let mut game = game_with_credits(0, 100);
    game.frame(Millis(16));
    let first = game.presenter().last_angle;
    game.frame(Millis(32));

    assert!(game.presenter().last_angle > first);
    assert!(game.presenter().calls.is_empty());
}
