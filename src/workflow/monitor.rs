//! 提交状态轮询 - 流程层
//!
//! 状态机：`Idle → Polling → Terminal → Idle`
//!
//! - 定时器只属于后台任务，任务结束前释放
//! - 每次 tick 等上一次请求返回后才会开始下一次，不会重叠
//! - 单次查询失败只记录日志，下一次 tick 继续
//! - 没有超时：服务端一直返回 running 就一直轮询，只能通过 [`MonitorHandle::stop`] 停止
//! - 得到最终状态后停在 `Terminal`，调用方处理完结果再用 [`MonitorHandle::reset`] 回到 `Idle`

use crate::clients::DodonaApi;
use crate::models::SubmissionStatus;
use crate::services::Reporter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// 轮询器状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorState {
    /// 没有活动的定时器
    Idle,
    /// 轮询中，`ticks` 为已完成的查询次数
    Polling { ticks: usize },
    /// 已得到最终状态
    Terminal(SubmissionStatus),
}

/// 轮询结束的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// 得到最终状态
    Finished(SubmissionStatus),
    /// 被调用方停止
    Stopped,
}

/// 提交状态轮询器
pub struct SubmissionMonitor {
    api: Arc<dyn DodonaApi>,
    reporter: Arc<dyn Reporter>,
    token: String,
    interval: Duration,
    state_tx: Arc<watch::Sender<MonitorState>>,
}

impl SubmissionMonitor {
    pub fn new(
        api: Arc<dyn DodonaApi>,
        reporter: Arc<dyn Reporter>,
        token: impl Into<String>,
        interval: Duration,
    ) -> Self {
        let (state_tx, _) = watch::channel(MonitorState::Idle);
        Self {
            api,
            reporter,
            token: token.into(),
            interval,
            state_tx: Arc::new(state_tx),
        }
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<MonitorState> {
        self.state_tx.subscribe()
    }

    /// 启动后台轮询
    ///
    /// 第一次查询在一个间隔之后发生。
    pub fn start(self, status_url: impl Into<String>) -> MonitorHandle {
        let (stop_tx, stop_rx) = oneshot::channel();
        let state_tx = self.state_tx.clone();
        let status_url = status_url.into();

        self.state_tx.send_replace(MonitorState::Polling { ticks: 0 });
        let join = tokio::spawn(self.poll(status_url, stop_rx));

        MonitorHandle {
            stop_tx: Some(stop_tx),
            state_tx,
            join: Some(join),
            outcome: None,
        }
    }

    async fn poll(self, status_url: String, mut stop_rx: oneshot::Receiver<()>) -> PollOutcome {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // handle 被丢弃后继续轮询，不再监听停止信号
        let mut detached = false;
        let mut ticks = 0;

        loop {
            tokio::select! {
                received = &mut stop_rx, if !detached => {
                    if received.is_ok() {
                        drop(ticker);
                        info!("⏹ 已停止轮询 {}", status_url);
                        self.state_tx.send_replace(MonitorState::Idle);
                        return PollOutcome::Stopped;
                    }
                    detached = true;
                    continue;
                }
                _ = ticker.tick() => {}
            }

            ticks += 1;
            match self.api.fetch_status(&status_url, &self.token).await {
                Ok(status) if status.is_in_progress() => {
                    debug!("第 {} 次查询: {}", ticks, status);
                    self.reporter
                        .output(&format!("Still checking the submission ({status})..."));
                    self.state_tx.send_replace(MonitorState::Polling { ticks });
                }
                Ok(status) => {
                    drop(ticker);
                    info!("✓ 第 {} 次查询得到最终状态: {}", ticks, status);
                    self.state_tx
                        .send_replace(MonitorState::Terminal(status.clone()));
                    return PollOutcome::Finished(status);
                }
                Err(e) => {
                    warn!("⚠️ 第 {} 次查询失败，下次继续: {}", ticks, e);
                    self.reporter
                        .output(&format!("Could not check the submission status: {e}"));
                    self.state_tx.send_replace(MonitorState::Polling { ticks });
                }
            }
        }
    }
}

/// 正在运行的轮询任务
pub struct MonitorHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    state_tx: Arc<watch::Sender<MonitorState>>,
    join: Option<JoinHandle<PollOutcome>>,
    outcome: Option<PollOutcome>,
}

impl MonitorHandle {
    /// 当前状态
    pub fn state(&self) -> MonitorState {
        self.state_tx.borrow().clone()
    }

    /// 结果处理完毕：`Terminal → Idle`；其它状态不变
    pub fn reset(&self) {
        self.state_tx.send_if_modified(|state| {
            if matches!(state, MonitorState::Terminal(_)) {
                *state = MonitorState::Idle;
                true
            } else {
                false
            }
        });
    }

    /// 停止轮询；已经结束时无效果
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// 等待轮询结束；可以重复调用
    pub async fn wait(&mut self) -> PollOutcome {
        if let Some(join) = self.join.as_mut() {
            let outcome = match join.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("轮询任务异常结束: {}", e);
                    PollOutcome::Stopped
                }
            };
            self.join = None;
            self.outcome = Some(outcome);
        }
        self.outcome.clone().unwrap_or(PollOutcome::Stopped)
    }
}
