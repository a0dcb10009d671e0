use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::info;

use pageguard_core::{GuardPolicy, PageGuard, PageView, Subscribe, ViewError};
use pageguard_model::{
    ActionOp, ConfirmPrompt, FormId, FormSpec, NoticeId, NoticeKind, NoticeSpec,
};
use pageguard_observe::{LoggerConfig, LoggerLevel, Subscriber, init_logger, init_panic_hook};
use pageguard_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

/// In-memory stand-in for a rendered page.
///
/// Holds the element state a DOM bridge would hold; confirmation prompts
/// are answered by a canned response instead of a dialog.
struct SimPage {
    state: Mutex<SimState>,
    confirm_answer: bool,
}

struct SimState {
    notices: Vec<NoticeSpec>,
    removed: Vec<NoticeId>,
    forms: Vec<FormSpec>,
    busy: HashMap<FormId, bool>,
}

impl SimPage {
    fn new(notices: Vec<NoticeSpec>, forms: Vec<FormSpec>, confirm_answer: bool) -> Self {
        Self {
            state: Mutex::new(SimState {
                notices,
                removed: Vec::new(),
                forms,
                busy: HashMap::new(),
            }),
            confirm_answer,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn removed(&self) -> Vec<NoticeId> {
        self.lock().removed.clone()
    }

    fn busy(&self, id: &FormId) -> bool {
        self.lock().busy.get(id).copied().unwrap_or(false)
    }
}

impl PageView for SimPage {
    fn notices(&self) -> Vec<NoticeSpec> {
        self.lock().notices.clone()
    }

    fn forms(&self) -> Vec<FormSpec> {
        self.lock().forms.clone()
    }

    fn begin_fade(&self, id: &NoticeId) -> Result<(), ViewError> {
        info!(notice = %id, "fade started");
        Ok(())
    }

    fn remove_notice(&self, id: &NoticeId) -> Result<(), ViewError> {
        let mut state = self.lock();
        state.notices.retain(|n| &n.id != id);
        state.removed.push(id.clone());
        Ok(())
    }

    fn submit_enabled(&self, id: &FormId) -> Result<bool, ViewError> {
        Ok(!self.busy(id))
    }

    fn set_submit_busy(&self, id: &FormId, busy: bool) -> Result<(), ViewError> {
        self.lock().busy.insert(id.clone(), busy);
        Ok(())
    }

    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, ViewError> {
        println!("---\n{prompt}\n--- answering: {}", self.confirm_answer);
        Ok(self.confirm_answer)
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger + panic hook
    let cfg = LoggerConfig {
        level: LoggerLevel::new("debug")?,
        ..Default::default()
    };
    init_logger(&cfg)?;
    init_panic_hook();
    info!("logger initialized");

    // 2) metrics + subscribers
    let metrics = PrometheusMetrics::new()?;
    let subscribers: Vec<Arc<dyn Subscribe>> = vec![Arc::new(Subscriber)];

    // 3) a page with three notices and two POST forms
    let page = Arc::new(SimPage::new(
        vec![
            NoticeSpec::new("flash-1", NoticeKind::Success),
            NoticeSpec::new("flash-2", NoticeKind::Warning),
            NoticeSpec::new("flash-3", NoticeKind::Info),
        ],
        vec![
            FormSpec::post("form-harvest", ActionOp::Other("harvest".into())),
            FormSpec::post("form-withdraw", ActionOp::Withdraw),
        ],
        true,
    ));

    let guard = PageGuard::builder(page.clone())
        .with_policy(GuardPolicy::default())
        .with_subscribers(subscribers)
        .with_metrics(Arc::new(metrics.clone()))
        .build();

    guard.attach().await?;

    // user closes the success flash right away
    let flash = NoticeId::from("flash-1");
    guard.close_notice(&flash).await;
    info!(removed = ?page.removed(), "after manual close");

    // plain POST: control goes busy, no prompt
    let harvest = FormId::from("form-harvest");
    let decision = guard.submit(&harvest).await;
    info!(?decision, busy = page.busy(&harvest), "harvest submitted");

    // destructive POST: blocking confirmation first
    let withdraw = FormId::from("form-withdraw");
    let decision = guard.submit(&withdraw).await;
    info!(?decision, busy = page.busy(&withdraw), "withdraw submitted");

    // let the remaining dismissal timer fire (5s + 300ms fade)
    info!("waiting for auto-dismissal...");
    tokio::time::sleep(Duration::from_millis(5_500)).await;
    info!(removed = ?page.removed(), "after auto-dismissal");

    // wait out the safety unlock (10s after submission)
    info!("waiting for safety unlock...");
    tokio::time::sleep(Duration::from_secs(10)).await;
    info!(
        harvest_busy = page.busy(&harvest),
        withdraw_busy = page.busy(&withdraw),
        "after safety unlock"
    );

    guard.detach().await;

    // 4) dump metrics in exposition format
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
    println!("{}", String::from_utf8_lossy(&buffer));

    info!("simulation completed");
    Ok(())
}
