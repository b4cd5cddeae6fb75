#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use engage_api::prelude::*;
use serde_json::{json, Value};

#[derive(Clone)]
struct Route {
    status: u16,
    body: String,
    delay: Duration,
}

/// In-memory backend keyed by request path. Unknown paths fail like a
/// refused connection.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<String, Route>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: Value) -> &Self {
        self.respond_after(path, status, body, Duration::ZERO)
    }

    pub fn respond_text(&self, path: &str, status: u16, body: &str) -> &Self {
        self.routes.borrow_mut().insert(
            path.to_string(),
            Route {
                status,
                body: body.to_string(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn respond_after(&self, path: &str, status: u16, body: Value, delay: Duration) -> &Self {
        self.routes.borrow_mut().insert(
            path.to_string(),
            Route {
                status,
                body: body.to_string(),
                delay,
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> LeaderboardResult<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        let route = self.routes.borrow().get(&request.path).cloned();
        let Some(route) = route else {
            return Err(LeaderboardError::Transport(format!(
                "connection refused: {}",
                request.path
            )));
        };
        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }
        Ok(ApiResponse {
            status: route.status,
            body: route.body,
        })
    }
}

pub fn github_body() -> Value {
    json!([{
        "user": { "username": "alice" },
        "total_prs": 5,
        "total_commits": 120,
        "followers": 10,
        "last_updated": "2024-01-01T00:00:00Z"
    }])
}

pub fn leetcode_body() -> Value {
    json!({ "results": [
        {
            "user": { "username": "bo" },
            "total_solved": 300,
            "easy_solved": 120,
            "medium_solved": 150,
            "hard_solved": 30,
            "last_updated": "2024-04-01T10:00:00Z"
        },
        {
            "user": { "username": "cy" },
            "total_solved": 90,
            "easy_solved": 60,
            "medium_solved": 25,
            "hard_solved": 5,
            "last_updated": "2024-04-01 09:00:00"
        }
    ]})
}

pub fn application_body() -> Value {
    json!([
        { "user": { "username": "dee" }, "applied": 48, "last_updated": "2024-03-10" },
        { "user": { "username": "eli" }, "applied": 12, "last_updated": "2024-03-09" }
    ])
}

pub fn attendance_body(count: u64, next: Option<&str>) -> Value {
    json!({
        "count": count,
        "next": next,
        "previous": null,
        "results": [
            {
                "id": 1,
                "member": { "username": "fay" },
                "sessions_attended": 14,
                "last_updated": "2024-05-01T18:00:00Z",
                "rank": 1
            },
            {
                "id": 2,
                "member": { "username": "gus" },
                "sessions_attended": 9,
                "last_updated": "2024-05-01T18:00:00Z",
                "rank": 2
            }
        ]
    })
}

pub fn cohort_stats_body() -> Value {
    json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "cohort": { "id": 4, "name": "Fall Cohort", "members": [] },
            "member": { "username": "hal" },
            "daily_checks": 20,
            "applications": 35,
            "online_assessments": 6,
            "offers": 1,
            "interviews": 4
        }]
    })
}
