use wheel_core::{GameConfig, GameSession, Millis, PcgRng, SegmentId, SpinPhase};

const FRAME_MS: u64 = 16;

/// Plays `spins` bets cycling through the segments; returns the game, wins and settled spins.
fn play(seed: u64, spins: u32) -> (GameSession<PcgRng>, u32, u32) {
    let mut game = GameSession::new(GameConfig::default(), PcgRng, seed).unwrap();
    let mut now = Millis::ZERO;
    let mut wins = 0;
    let mut settled = 0;

    for round in 0..spins {
        if game.credits() < game.config().bet_cost {
            game.reset_credits();
        }

        let segment = SegmentId(round % game.config().segment_count);
        let plan = game.select(segment, now).unwrap();
        let start_crossing = game.layout().crossing_index(plan.start_angle);

        let mut ticks = 0;
        loop {
            now = now + FRAME_MS;
            let report = game.advance(now);
            ticks += report.ticks.count();

            if let Some(settlement) = report.settlement {
                settled += 1;
                if settlement.outcome.is_win() {
                    wins += 1;
                    assert_eq!(settlement.outcome.segment(), segment);
                }
                assert_eq!(
                    game.layout().segment_under_pointer(report.angle),
                    settlement.outcome.segment()
                );
                break;
            }
        }

        let end_crossing = game.layout().crossing_index(plan.target_angle);
        assert_eq!(ticks, (end_crossing - start_crossing) as u64);
        assert_eq!(game.phase(), SpinPhase::Idle);
    }

    (game, wins, settled)
}

#[test]
fn every_spin_settles_under_the_pointer() {
    for seed in [1, 7, 42, 1_000_003] {
        let (game, _, settled) = play(seed, 12);
        assert_eq!(settled, 12);
        assert_eq!(game.spins_played(), 12);
    }
}

#[test]
fn ledger_balances_without_refills() {
    let config = GameConfig::default();
    let (game, wins, settled) = play(99, 9);

    let expected = config.initial_credits - settled * config.bet_cost + wins * config.payout;
    assert_eq!(game.credits(), expected);
}

#[test]
fn same_seed_gives_same_session() {
    let (first, first_wins, _) = play(2024, 10);
    let (second, second_wins, _) = play(2024, 10);
    assert_eq!(first_wins, second_wins);
    assert_eq!(first.credits(), second.credits());
    assert_eq!(first.last_win(), second.last_win());
}
