use async_trait::async_trait;
use dodona_submit::services::{build_submission, map_status_to_message};
use dodona_submit::utils::logging;
use dodona_submit::{
    ActiveDocument, Config, DodonaApi, DodonaClient, ExerciseInformation, LinkExtractor, Reporter,
    SubmissionFlow, SubmissionReceipt, SubmissionRecord, SubmissionStatus, TransportError,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// 按顺序返回 queued → running → correct 的 Dodona
struct ScriptedDodona {
    statuses: Mutex<VecDeque<&'static str>>,
    polled_urls: Mutex<Vec<String>>,
    submitted: Mutex<Vec<SubmissionRecord>>,
}

impl ScriptedDodona {
    fn new(statuses: &[&'static str]) -> Self {
        Self {
            statuses: Mutex::new(statuses.iter().copied().collect()),
            polled_urls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DodonaApi for ScriptedDodona {
    async fn submit(
        &self,
        record: &SubmissionRecord,
        _token: &str,
    ) -> Result<SubmissionReceipt, TransportError> {
        self.submitted.lock().unwrap().push(record.clone());
        Ok(serde_json::from_str(r#"{"url": "https://dodona.ugent.be/submissions/789.json"}"#)
            .unwrap())
    }

    async fn fetch_exercise_info(
        &self,
        exercise_url: &str,
        _token: &str,
    ) -> Result<ExerciseInformation, TransportError> {
        assert_eq!(
            exercise_url,
            "https://dodona.ugent.be/en/courses/12/series/3/activities/456"
        );
        Ok(ExerciseInformation {
            name: "Hello World".to_string(),
        })
    }

    async fn fetch_status(
        &self,
        status_url: &str,
        _token: &str,
    ) -> Result<SubmissionStatus, TransportError> {
        self.polled_urls.lock().unwrap().push(status_url.to_string());
        let next = self.statuses.lock().unwrap().pop_front().unwrap_or("running");
        Ok(SubmissionStatus::from_wire(next))
    }
}

#[derive(Default)]
struct CollectingReporter {
    lines: Mutex<Vec<String>>,
    links: Mutex<Vec<Option<String>>>,
}

impl Reporter for CollectingReporter {
    fn output(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(format!("error: {message}"));
    }

    fn notify(&self, message: &str, link: Option<&str>) {
        self.lines.lock().unwrap().push(message.to_string());
        self.links.lock().unwrap().push(link.map(str::to_string));
    }
}

#[tokio::test]
async fn test_submission_scenario() {
    logging::init(false);

    let config = Config {
        dodona_api_key: "token".to_string(),
        poll_interval_ms: 10,
        ..Config::default()
    };
    let api = Arc::new(ScriptedDodona::new(&["queued", "running", "correct"]));
    let reporter = Arc::new(CollectingReporter::default());
    let flow = SubmissionFlow::new(&config, api.clone(), reporter.clone());

    let text = "https://dodona.ugent.be/en/courses/12/series/3/activities/456\nprint('hi')\n";
    let doc = ActiveDocument::new("hello.py", text);

    let outcome = flow.run(Some(&doc), true).await.expect("提交应该成功");

    assert_eq!(outcome.ctx.link.course_id, 12);
    assert_eq!(outcome.ctx.link.exercise_id, 456);
    assert_eq!(
        api.submitted.lock().unwrap().as_slice(),
        [build_submission(12, 456, text)]
    );
    assert_eq!(
        api.polled_urls.lock().unwrap().as_slice(),
        ["https://dodona.ugent.be/submissions/789.json"; 3]
    );
    assert_eq!(outcome.status, Some(SubmissionStatus::Correct));
    assert!(outcome.message.ends_with(map_status_to_message("correct")));
    assert_eq!(
        reporter.links.lock().unwrap().last().cloned().flatten().as_deref(),
        Some("https://dodona.ugent.be/submissions/789")
    );
}

#[test]
fn test_link_survives_rest_of_file() {
    let extractor = LinkExtractor::new();
    let body = "x = 1\n".repeat(1000);
    let text = format!("# https://dodona.ugent.be/courses/99/series/1/activities/1234\n{body}");
    let link = extractor.extract(&text).unwrap();
    assert_eq!((link.course_id, link.exercise_id), (99, 1234));
}

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：DODONA_API_KEY=... cargo test -- --ignored
async fn test_live_exercise_info() {
    logging::init(true);

    let config = Config::from_env().expect("加载配置失败");
    assert!(config.has_api_key(), "需要设置 DODONA_API_KEY");

    let client = DodonaClient::new(&config).expect("创建客户端失败");
    let info = client
        .fetch_exercise_info(
            "https://dodona.ugent.be/en/courses/12/series/3/activities/456",
            config.dodona_api_key.trim(),
        )
        .await;

    println!("练习信息: {:?}", info);
}
