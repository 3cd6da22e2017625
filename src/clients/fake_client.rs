//! 测试用的 Dodona 客户端：按脚本返回结果

use super::DodonaApi;
use crate::error::TransportError;
use crate::models::{ExerciseInformation, SubmissionReceipt, SubmissionRecord, SubmissionStatus};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub struct FakeDodona {
    pub receipt_url: Option<String>,
    pub exercise_name: Option<String>,
    statuses: Mutex<VecDeque<Result<SubmissionStatus, TransportError>>>,
    pub status_delay: Duration,
    pub submitted: Mutex<Vec<(SubmissionRecord, String)>>,
    pub status_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl FakeDodona {
    pub fn new(statuses: Vec<Result<SubmissionStatus, TransportError>>) -> Self {
        Self {
            receipt_url: Some("https://dodona.ugent.be/submissions/789.json".to_string()),
            exercise_name: Some("Hello World".to_string()),
            statuses: Mutex::new(statuses.into()),
            status_delay: Duration::ZERO,
            submitted: Mutex::new(Vec::new()),
            status_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl DodonaApi for FakeDodona {
    async fn submit(
        &self,
        record: &SubmissionRecord,
        token: &str,
    ) -> Result<SubmissionReceipt, TransportError> {
        self.submitted
            .lock()
            .unwrap()
            .push((record.clone(), token.to_string()));
        match &self.receipt_url {
            Some(url) => Ok(SubmissionReceipt {
                status_url: url.clone(),
            }),
            None => Err(TransportError::bad_status("fake/submissions.json", 500)),
        }
    }

    async fn fetch_exercise_info(
        &self,
        exercise_url: &str,
        _token: &str,
    ) -> Result<ExerciseInformation, TransportError> {
        match &self.exercise_name {
            Some(name) => Ok(ExerciseInformation { name: name.clone() }),
            None => Err(TransportError::bad_status(format!("{exercise_url}.json"), 404)),
        }
    }

    async fn fetch_status(
        &self,
        _status_url: &str,
        _token: &str,
    ) -> Result<SubmissionStatus, TransportError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.status_delay.is_zero() {
            tokio::time::sleep(self.status_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(SubmissionStatus::Running))
    }
}
