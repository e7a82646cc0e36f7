//! In-process mock of the resort backend, driven through `OneshotHttpClient`

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{NaiveDate, Utc};
use serde_json::json;

use resort_client::{OneshotHttpClient, ResortClient};
use shared::models::*;

pub struct MockBackend {
    pub resorts: Vec<Resort>,
    pub rooms: Vec<Room>,
    pub restaurants: Vec<Restaurant>,
    pub users: Vec<User>,
    pub check_ins: Vec<CheckIn>,
    /// Number of mutating requests received
    pub writes: usize,
    next_id: i64,
}

pub type Shared = Arc<Mutex<MockBackend>>;

impl MockBackend {
    pub fn seeded() -> Self {
        let rooms = (1..=5)
            .map(|n| Room {
                id: n,
                resort_id: 1,
                room_number: format!("10{}", n),
                status: RoomStatus::Available,
            })
            .collect();
        Self {
            resorts: vec![Resort {
                id: 1,
                name: "Palm Bay".into(),
                location: "Cancun".into(),
                created_at: None,
                updated_at: None,
            }],
            rooms,
            restaurants: vec![Restaurant {
                id: 3,
                name: "Sea Breeze".into(),
                resort_id: 1,
                status: RestaurantStatus::Open,
            }],
            users: vec![
                User {
                    id: 10,
                    username: "nina".into(),
                    email: "nina@palmbay.test".into(),
                    role: Role::Host,
                    status: UserStatus::Inactive,
                    resort_id: Some(1),
                    restaurant_id: None,
                    meal_type: None,
                },
                User {
                    id: 11,
                    username: "omar".into(),
                    email: "omar@palmbay.test".into(),
                    role: Role::Manager,
                    status: UserStatus::Inactive,
                    resort_id: Some(1),
                    restaurant_id: None,
                    meal_type: None,
                },
            ],
            check_ins: Vec::new(),
            writes: 0,
            next_id: 100,
        }
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Unsigned JWT as the backend would issue it
pub fn token(username: &str, role: Role, exp_offset_secs: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = json!({
        "sub": 1,
        "username": username,
        "role": role.as_str(),
        "exp": Utc::now().timestamp() + exp_offset_secs,
        "iat": Utc::now().timestamp(),
    });
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.sig", header, body)
}

fn ok<T: serde::Serialize>(data: T) -> Response {
    Json(json!({ "success": true, "data": data })).into_response()
}

fn fail(status: StatusCode, error: &str) -> Response {
    (status, Json(json!({ "success": false, "error": error }))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "))
}

async fn login(Json(body): Json<serde_json::Value>) -> Response {
    let username = body["username"].as_str().unwrap_or_default();
    let role = match (username, body["password"].as_str()) {
        ("admin", Some("secret")) => Role::Admin,
        ("manager", Some("secret")) => Role::Manager,
        ("host", Some("secret")) => Role::Host,
        ("stale", Some("secret")) => {
            return ok(json!({ "token": token(username, Role::Manager, -60) }));
        }
        _ => return fail(StatusCode::UNAUTHORIZED, "Invalid credentials"),
    };
    ok(json!({ "token": token(username, role, 3600) }))
}

async fn me(State(db): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Missing token");
    }
    let db = db.lock().unwrap();
    ok(&db.users[0])
}

async fn list_resorts(State(db): State<Shared>) -> Response {
    ok(&db.lock().unwrap().resorts)
}

async fn get_resort(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let db = db.lock().unwrap();
    match db.resorts.iter().find(|r| r.id == id) {
        Some(r) => ok(r),
        None => fail(StatusCode::NOT_FOUND, "Resort not found"),
    }
}

async fn create_resort(State(db): State<Shared>, Json(body): Json<ResortCreate>) -> Response {
    let mut db = db.lock().unwrap();
    db.writes += 1;
    let resort = Resort {
        id: db.next_id(),
        name: body.name,
        location: body.location,
        created_at: None,
        updated_at: None,
    };
    db.resorts.push(resort.clone());
    (StatusCode::CREATED, Json(json!({ "success": true, "data": resort }))).into_response()
}

async fn delete_resort(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut db = db.lock().unwrap();
    db.writes += 1;
    db.resorts.retain(|r| r.id != id);
    Json(json!({ "success": true, "message": "Resort deleted" })).into_response()
}

async fn resort_rooms(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let db = db.lock().unwrap();
    let rooms: Vec<&Room> = db.rooms.iter().filter(|r| r.resort_id == id).collect();
    ok(rooms)
}

async fn resort_restaurants(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let db = db.lock().unwrap();
    let list: Vec<&Restaurant> = db.restaurants.iter().filter(|r| r.resort_id == id).collect();
    ok(list)
}

async fn restaurant_status(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<RestaurantStatusUpdate>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.writes += 1;
    match db.restaurants.iter_mut().find(|r| r.id == id) {
        Some(r) => {
            r.status = body.status;
            ok(r.clone())
        }
        None => fail(StatusCode::NOT_FOUND, "Restaurant not found"),
    }
}

async fn get_user(State(db): State<Shared>, Path(id): Path<i64>) -> Response {
    let db = db.lock().unwrap();
    match db.users.iter().find(|u| u.id == id) {
        Some(u) => ok(u),
        None => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_user(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<UserUpdate>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.writes += 1;
    match db.users.iter_mut().find(|u| u.id == id) {
        Some(u) => {
            *u = u.merged(&body);
            ok(u.clone())
        }
        None => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn user_status(
    State(db): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<UserStatusUpdate>,
) -> Response {
    let mut db = db.lock().unwrap();
    db.writes += 1;
    match db.users.iter_mut().find(|u| u.id == id) {
        Some(u) => {
            u.status = body.status;
            ok(u.clone())
        }
        None => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn room_status(
    State(db): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let db = db.lock().unwrap();
    let resort_id: i64 = q.get("resortId").and_then(|v| v.parse().ok()).unwrap_or(0);
    let Some(meal) = q.get("mealType").and_then(|v| v.parse::<MealType>().ok()) else {
        return fail(StatusCode::BAD_REQUEST, "mealType is required");
    };
    let statuses: Vec<RoomCheckInStatus> = db
        .rooms
        .iter()
        .filter(|r| r.resort_id == resort_id)
        .map(|r| RoomCheckInStatus {
            room_id: r.id,
            room_number: Some(r.room_number.clone()),
            checked_in: db
                .check_ins
                .iter()
                .any(|c| c.room_id == r.id && c.meal_type == meal && c.is_active()),
        })
        .collect();
    ok(statuses)
}

async fn today(State(db): State<Shared>, Query(q): Query<HashMap<String, String>>) -> Response {
    let db = db.lock().unwrap();
    let resort_id: i64 = q.get("resortId").and_then(|v| v.parse().ok()).unwrap_or(0);
    let today = Utc::now().date_naive();
    let list: Vec<&CheckIn> = db
        .check_ins
        .iter()
        .filter(|c| c.resort_id == resort_id && c.service_date(&Utc) == today)
        .collect();
    ok(list)
}

async fn list_check_ins(
    State(db): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    let db = db.lock().unwrap();
    let resort_id: i64 = q.get("resortId").and_then(|v| v.parse().ok()).unwrap_or(0);
    let Some(date) = q
        .get("date")
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    else {
        return fail(StatusCode::BAD_REQUEST, "date is required");
    };
    let list: Vec<&CheckIn> = db
        .check_ins
        .iter()
        .filter(|c| c.resort_id == resort_id && c.service_date(&Utc) == date)
        .collect();
    ok(list)
}

async fn check_in(State(db): State<Shared>, Json(req): Json<CheckInRequest>) -> Response {
    let mut db = db.lock().unwrap();
    db.writes += 1;
    let taken = db
        .check_ins
        .iter()
        .any(|c| c.room_id == req.room_id && c.meal_type == req.meal_type && c.is_active());
    if taken {
        return fail(StatusCode::CONFLICT, "Room already checked in");
    }
    let record = CheckIn {
        id: db.next_id(),
        room_id: req.room_id,
        resort_id: req.resort_id,
        outlet_name: req.outlet_name,
        table_number: req.table_number,
        meal_type: req.meal_type,
        meal_plan: req.meal_plan,
        check_in_time: Utc::now(),
        check_out_time: None,
        status: CheckInStatus::CheckedIn,
        remarks: None,
    };
    db.check_ins.push(record.clone());
    ok(record)
}

async fn check_out(
    State(db): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<CheckOutRequest>,
) -> Response {
    if !authorized(&headers) {
        return fail(StatusCode::UNAUTHORIZED, "Missing token");
    }
    let mut db = db.lock().unwrap();
    db.writes += 1;
    match db.check_ins.iter_mut().find(|c| c.id == req.check_in_id && c.is_active()) {
        Some(c) => {
            c.status = CheckInStatus::CheckedOut;
            c.check_out_time = Some(Utc::now());
            c.remarks = Some(req.remarks);
            ok(c.clone())
        }
        None => fail(StatusCode::NOT_FOUND, "Check-in not found"),
    }
}

async fn summary(State(db): State<Shared>) -> Response {
    let db = db.lock().unwrap();
    ok(shared::dining::CheckInSummary::from_records(&db.check_ins))
}

pub fn router(db: Shared) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/resorts", get(list_resorts).post(create_resort))
        .route("/resorts/{id}", get(get_resort).delete(delete_resort))
        .route("/resorts/{id}/rooms", get(resort_rooms))
        .route("/resorts/{id}/restaurants", get(resort_restaurants))
        .route("/restaurants/{id}/status", patch(restaurant_status))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/users/{id}/status", patch(user_status))
        .route("/checkins", get(list_check_ins))
        .route("/checkins/room-status", get(room_status))
        .route("/checkins/today", get(today))
        .route("/checkins/check-in", post(check_in))
        .route("/checkins/check-out", post(check_out))
        .route("/analytics/summary", get(summary))
        .with_state(db)
}

/// Client wired to a fresh seeded backend
pub fn setup() -> (ResortClient<OneshotHttpClient>, Shared) {
    let db: Shared = Arc::new(Mutex::new(MockBackend::seeded()));
    let client = ResortClient::new(OneshotHttpClient::new(router(db.clone())));
    (client, db)
}
