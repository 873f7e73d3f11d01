//! Threaded cadence source.
//!
//! Runs an `embassy-time` [`Ticker`] on a dedicated thread.  While armed
//! for an epoch it posts one [`Event::TimerCadence`] per period into the
//! oven's event queue; the timer itself only ever changes on the
//! consumer thread.
//!
//! ```text
//!  Timer::start ── arm(epoch) ──▶ ┌─────────────────┐
//!  Timer::stop  ── disarm ──────▶ │ cadence thread  │ ── TimerCadence{epoch} ──▶ EventQueue
//!                                 │ Ticker::every   │
//!                                 └─────────────────┘
//! ```

use std::sync::Arc;
use std::thread::JoinHandle;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use log::{debug, info};

use crate::app::ports::Cadence;
use crate::events::{Event, EventSender};

/// Control word for the cadence thread.  Only the latest one matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CadenceCmd {
    Arm(u32),
    Disarm,
    Shutdown,
}

type CadenceControl = Signal<CriticalSectionRawMutex, CadenceCmd>;

pub struct TickerCadence {
    control: Arc<CadenceControl>,
    thread: Option<JoinHandle<()>>,
}

impl TickerCadence {
    /// Spawn the cadence thread.  It stays idle until armed.
    pub fn spawn(period_ms: u64, sender: EventSender) -> std::io::Result<Self> {
        let control = Arc::new(CadenceControl::new());
        let thread_control = control.clone();
        let thread = std::thread::Builder::new()
            .name("cadence".into())
            .spawn(move || {
                futures_lite::future::block_on(run(
                    &thread_control,
                    Duration::from_millis(period_ms),
                    &sender,
                ));
            })?;
        info!("cadence: thread started ({} ms period)", period_ms);
        Ok(Self {
            control,
            thread: Some(thread),
        })
    }
}

impl Cadence for TickerCadence {
    fn arm(&mut self, epoch: u32) {
        self.control.signal(CadenceCmd::Arm(epoch));
    }

    fn disarm(&mut self) {
        self.control.signal(CadenceCmd::Disarm);
    }
}

impl Drop for TickerCadence {
    fn drop(&mut self) {
        self.control.signal(CadenceCmd::Shutdown);
        // Not joined: the thread may be waiting on a full queue whose
        // consumer is the one dropping us.
        drop(self.thread.take());
    }
}

async fn run(control: &CadenceControl, period: Duration, sender: &EventSender) {
    let mut ticker = Ticker::every(period);
    let mut armed: Option<u32> = None;

    loop {
        let cmd = match armed {
            None => control.wait().await,
            Some(epoch) => match select(control.wait(), ticker.next()).await {
                Either::First(cmd) => cmd,
                Either::Second(()) => {
                    sender.send(Event::TimerCadence { epoch }).await;
                    continue;
                }
            },
        };

        match cmd {
            CadenceCmd::Arm(epoch) => {
                debug!("cadence: armed for run {}", epoch);
                ticker.reset();
                armed = Some(epoch);
            }
            CadenceCmd::Disarm => armed = None,
            CadenceCmd::Shutdown => {
                debug!("cadence: thread exiting");
                return;
            }
        }
    }
}
