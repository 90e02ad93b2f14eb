use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use wheel_core::{GameConfig, Millis, RngOracle, SegmentId};
use wheel_runtime::{
    AssetError, AssetEvent, Cue, CueSource, Event, LoadedCue, LoopExit, ManualClock,
    PresentationAdapter, Runtime, RuntimeConfig, RuntimeError, SpinEvent, Topic,
};

struct Forced(u32);

impl RngOracle for Forced {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }

    fn pick_index(&self, _seed: u64, _count: u32) -> u32 {
        self.0
    }
}

#[derive(Default)]
struct Counting {
    frames: usize,
    cues: Vec<Cue>,
    credits: Option<u32>,
}

impl PresentationAdapter for Counting {
    fn render(&mut self, _angle: f64) {}

    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn set_message(&mut self, _text: &str) {}

    fn set_credits(&mut self, credits: u32) {
        self.credits = Some(credits);
    }

    fn set_selected(&mut self, _segment: Option<SegmentId>) {}

    fn present(&mut self) {
        self.frames += 1;
    }
}

fn config() -> RuntimeConfig {
    RuntimeConfig {
        seed: Some(11),
        frame_interval_ms: 1,
        ..RuntimeConfig::default()
    }
}

async fn next_spin_finished(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> (bool, u32) {
    loop {
        if let Event::Spin(SpinEvent::Finished {
            outcome, credits, ..
        }) = rx.recv().await.unwrap()
        {
            return (outcome.is_win(), credits);
        }
    }
}

#[tokio::test]
async fn handle_drives_a_full_spin() {
    let clock = ManualClock::new(Millis::ZERO);
    let runtime = Runtime::builder(Counting::default())
        .config(config())
        .rng(Forced(6))
        .clock(clock.clone())
        .build()
        .unwrap();
    assert_eq!(runtime.seed(), 11);

    let handle = runtime.handle();
    let mut spins = runtime.subscribe(Topic::Spin);
    let task = tokio::spawn(runtime.run());

    handle.select(SegmentId(6)).await.unwrap();
    match timeout(Duration::from_secs(5), spins.recv()).await {
        Ok(Ok(Event::Spin(SpinEvent::Started { selected, credits, .. }))) => {
            assert_eq!(selected, SegmentId(6));
            assert_eq!(credits, 90);
        }
        other => panic!("expected spin start, got {other:?}"),
    }

    clock.set(Millis(GameConfig::DEFAULT_SPIN_DURATION_MS));
    let finished = timeout(Duration::from_secs(5), next_spin_finished(&mut spins))
        .await
        .unwrap();
    assert_eq!(finished, (true, 170));

    handle.shutdown().await.unwrap();
    let finished = task.await.unwrap().unwrap();
    assert_eq!(finished.summary.exit, LoopExit::Shutdown);
    assert!(finished.summary.frames > 0);

    let presenter = finished.game.presenter();
    assert!(presenter.frames > 0);
    assert_eq!(presenter.credits, Some(170));
    assert_eq!(presenter.cues.first(), Some(&Cue::Click));
    assert_eq!(presenter.cues.last(), Some(&Cue::Score));
}

#[tokio::test(start_paused = true)]
async fn system_clock_runs_a_spin_on_paused_time() {
    let runtime = Runtime::builder(Counting::default())
        .config(RuntimeConfig {
            frame_interval_ms: 16,
            ..config()
        })
        .rng(Forced(2))
        .build()
        .unwrap();

    let handle = runtime.handle();
    let mut spins = runtime.subscribe(Topic::Spin);
    let task = tokio::spawn(runtime.run());

    handle.select(SegmentId(2)).await.unwrap();
    let started = tokio::time::Instant::now();
    let finished = timeout(Duration::from_secs(60), next_spin_finished(&mut spins))
        .await
        .unwrap();
    assert_eq!(finished, (true, 170));
    assert!(started.elapsed() >= Duration::from_millis(GameConfig::DEFAULT_SPIN_DURATION_MS - 32));

    handle.shutdown().await.unwrap();
    let finished = task.await.unwrap().unwrap();
    assert_eq!(finished.summary.exit, LoopExit::Shutdown);
}

#[tokio::test]
async fn dropping_every_handle_stops_the_loop() {
    let runtime = Runtime::builder(Counting::default())
        .config(config())
        .build()
        .unwrap();
    let handle = runtime.handle();
    let task = tokio::spawn(runtime.run());

    drop(handle);
    let finished = timeout(Duration::from_secs(5), task)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(finished.summary.exit, LoopExit::Disconnected);
}

#[tokio::test]
async fn invalid_game_config_fails_to_build() {
    let mut config = config();
    config.game.segment_count = 0;

    let result = Runtime::builder(Counting::default()).config(config).build();
    assert!(matches!(result, Err(RuntimeError::Config(_))));
}

struct ClickOnly;

#[async_trait]
impl CueSource for ClickOnly {
    async fn load(&self, cue: Cue) -> Result<LoadedCue, AssetError> {
        match cue {
            Cue::Click => Ok(LoadedCue { cue, size_bytes: 8 }),
            _ => Err(AssetError::NotFound {
                path: cue.file_name().into(),
            }),
        }
    }
}

#[tokio::test]
async fn failed_cues_are_reported_and_skipped() {
    let clock = ManualClock::new(Millis::ZERO);
    let runtime = Runtime::builder(Counting::default())
        .config(config())
        .rng(Forced(1))
        .clock(clock.clone())
        .cue_source(Arc::new(ClickOnly))
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut assets = runtime.subscribe(Topic::Assets);
    let task = tokio::spawn(runtime.run());

    let mut ready = Vec::new();
    let mut unavailable = Vec::new();
    while ready.len() + unavailable.len() < 4 {
        match timeout(Duration::from_secs(5), assets.recv()).await.unwrap().unwrap() {
            Event::Assets(AssetEvent::CueReady { cue }) => ready.push(cue),
            Event::Assets(AssetEvent::CueUnavailable { cue, .. }) => unavailable.push(cue),
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(ready, [Cue::Click]);
    unavailable.sort();
    assert_eq!(unavailable, [Cue::Tick, Cue::Score, Cue::Fail]);

    let mut spins = handle.subscribe(Topic::Spin);
    handle.select(SegmentId(2)).await.unwrap();
    let started = timeout(Duration::from_secs(5), spins.recv()).await.unwrap().unwrap();
    assert!(matches!(started, Event::Spin(SpinEvent::Started { .. })));
    clock.set(Millis(GameConfig::DEFAULT_SPIN_DURATION_MS));
    let finished = timeout(Duration::from_secs(5), next_spin_finished(&mut spins))
        .await
        .unwrap();
    assert_eq!(finished, (false, 90));

    handle.shutdown().await.unwrap();
    let finished = task.await.unwrap().unwrap();
    assert_eq!(finished.game.presenter().cues, [Cue::Click]);
}
