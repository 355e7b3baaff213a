use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::state::Delta;

/// Handle to the simulated clock thread. Dropping it stops the thread.
pub struct LiveTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl LiveTicker {
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for LiveTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Simulated match clock. Sends a MinuteTick on the configured interval;
/// the state layer decides which matches advance. LIVE_TICK_SECS tunes the
/// interval (default 60s, floor 5s so a typo cannot spin the UI).
pub fn spawn_live_ticker(tx: Sender<Delta>) -> LiveTicker {
    let tick_interval = Duration::from_secs(
        env::var("LIVE_TICK_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(60)
            .max(5),
    );

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let handle = thread::spawn(move || {
        let _ = tx.send(Delta::Log(format!(
            "[INFO] Live ticker started ({}s interval)",
            tick_interval.as_secs()
        )));
        let mut last_tick = Instant::now();

        loop {
            thread::sleep(Duration::from_millis(200));
            if stop_flag.load(Ordering::Relaxed) {
                break;
            }
            if last_tick.elapsed() >= tick_interval {
                if tx.send(Delta::MinuteTick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });

    LiveTicker {
        stop,
        handle: Some(handle),
    }
}
