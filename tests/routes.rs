mod common;

use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use common::*;
use portal::entities::{content::ContentKind, user::UserRole};
use portal::repositories::{content_repository::ContentRepository, like_repository::LikeLedger};
use uuid::Uuid;

async fn seed_dashboard(state: &portal::config::AppState) {
    for i in 1..=8 {
        create_item(&state.storage, ContentKind::News, &format!("news {i}")).await;
    }
    for i in 1..=4 {
        create_item(&state.storage, ContentKind::Job, &format!("job {i}")).await;
        create_item(&state.storage, ContentKind::Event, &format!("event {i}")).await;
        create_item(&state.storage, ContentKind::Partner, &format!("partner {i}")).await;
    }
}

fn titles(items: &serde_json::Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn anonymous_dashboard_has_latest_items_and_no_current_user() {
    let state = state().await;
    seed_dashboard(&state).await;

    let res = send(&state, get("/", None)).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["view"], "dashboard");
    let data = &body["data"];
    assert!(data.get("current_user").is_none());

    assert_eq!(titles(&data["news"]), ["news 8", "news 7", "news 6", "news 5", "news 4", "news 3"]);
    assert_eq!(titles(&data["events"]), ["event 4", "event 3", "event 2"]);
    assert_eq!(titles(&data["jobs"]), ["job 4", "job 3", "job 2"]);
    assert_eq!(data["partners"].as_array().unwrap().len(), 3);

    for job in data["jobs"].as_array().unwrap() {
        assert_eq!(job["total_likes"], 0);
        assert_eq!(job["liked_by_current_user"], false);
    }
    assert!(data["news"][0].get("total_likes").is_none());
}

#[tokio::test]
async fn signed_in_dashboard_carries_current_user() {
    let state = state().await;
    let user = create_user(&state.storage, "maria", UserRole::User).await;

    let res = send(&state, get("/", Some(&session_cookie(&user)))).await;
    let body = json_body(res).await;
    assert_eq!(body["data"]["current_user"]["username"], "maria");
    assert!(body["data"]["current_user"].get("password_hash").is_none());
}

#[tokio::test]
async fn invalid_cookie_is_treated_as_anonymous() {
    let state = state().await;

    let res = send(&state, get("/", Some("tokenJWT=garbage"))).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(json_body(res).await["data"].get("current_user").is_none());
}

#[tokio::test]
async fn non_admin_cannot_publish() {
    let state = state().await;
    let user = create_user(&state.storage, "joao", UserRole::User).await;

    let res = send(
        &state,
        post_form("/noticias/create", Some(&session_cookie(&user)), "title=Hack&content=nope"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let news = ContentRepository::new(&state.storage, ContentKind::News).get_all().await.unwrap();
    assert!(news.is_empty());
}

#[tokio::test]
async fn anonymous_publish_goes_to_login() {
    let state = state().await;

    let res = send(&state, post_form("/eventos/create", None, "title=Party&content=tonight")).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn admin_publishes_news() {
    let state = state().await;
    let admin = create_user(&state.storage, "admin", UserRole::Admin).await;

    let res = send(
        &state,
        post_form(
            "/noticias/create",
            Some(&session_cookie(&admin)),
            "title=Launch&description=Short&content=Full+story&category=",
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(location(&res), "/noticias");

    let body = json_body(res).await;
    assert_eq!(body["kind"], "news");
    let id = body["id"].as_str().unwrap().to_string();

    let stored = ContentRepository::new(&state.storage, ContentKind::News)
        .get_by_id(&id)
        .await
        .unwrap()
        .expect("created item is retrievable");
    assert_eq!(stored.title, "Launch");
    assert_eq!(stored.category, None);
    assert_eq!(stored.author_id, Some(admin.id));

    let res = send(&state, get(&format!("/noticia/{id}"), None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["view"], "news");
    assert_eq!(body["data"]["item"]["title"], "Launch");
}

#[tokio::test]
async fn partner_form_accepts_prefixed_field_names() {
    let state = state().await;
    let admin = create_user(&state.storage, "admin", UserRole::Admin).await;

    let res = send(
        &state,
        post_form(
            "/parceiros/create",
            Some(&session_cookie(&admin)),
            "ptitle=Acme&pdescription=Tools&pcontent=We+sponsor",
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(location(&res), "/parceiros");
}

#[tokio::test]
async fn publish_rejects_empty_title() {
    let state = state().await;
    let admin = create_user(&state.storage, "admin", UserRole::Admin).await;

    let res = send(
        &state,
        post_form("/empregos/create", Some(&session_cookie(&admin)), "title=&content=body"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["view"], "error");

    let jobs = ContentRepository::new(&state.storage, ContentKind::Job).get_all().await.unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn unknown_item_renders_error_view() {
    let state = state().await;
    let event = create_item(&state.storage, ContentKind::Event, "Meetup").await;

    for uri in [
        format!("/noticia/{}", Uuid::new_v4()),
        "/emprego/not-a-uuid".to_string(),
        format!("/parceiro/{}", event.public_id),
    ] {
        let res = send(&state, get(&uri, None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
        let body = json_body(res).await;
        assert_eq!(body["view"], "error");
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn like_toggle_round_trip() {
    let state = state().await;
    let user = create_user(&state.storage, "ana", UserRole::User).await;
    let job = create_item(&state.storage, ContentKind::Job, "Backend dev").await;
    let cookie = session_cookie(&user);
    let uri = format!("/empregos/curtida/{}", job.public_id);

    let req = Request::builder()
        .method("POST")
        .uri(uri.as_str())
        .header(header::COOKIE, cookie.as_str())
        .header(header::REFERER, format!("http://localhost:3000/emprego/{}", job.public_id))
        .body(Body::empty())
        .unwrap();
    let res = send(&state, req).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/emprego/{}", job.public_id));

    let body = json_body(send(&state, get("/empregos", Some(&cookie))).await).await;
    assert_eq!(body["view"], "all-jobs");
    let listed = &body["data"]["items"][0];
    assert_eq!(listed["total_likes"], 1);
    assert_eq!(listed["liked_by_current_user"], true);

    let anon = json_body(send(&state, get("/empregos", None)).await).await;
    assert_eq!(anon["data"]["items"][0]["total_likes"], 1);
    assert_eq!(anon["data"]["items"][0]["liked_by_current_user"], false);

    // Without a Referer the user lands on the job list.
    let res = send(&state, post_form(&uri, Some(&cookie), "")).await;
    assert_eq!(location(&res), "/empregos");
    assert_eq!(LikeLedger::count_facts(&state.storage, user.id, job.id, ContentKind::Job).await.unwrap(), 0);
}

#[tokio::test]
async fn anonymous_like_goes_to_login() {
    let state = state().await;
    let job = create_item(&state.storage, ContentKind::Job, "Backend dev").await;

    let res = send(&state, post_form(&format!("/empregos/curtida/{}", job.public_id), None, "")).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn liking_unknown_job_is_404() {
    let state = state().await;
    let user = create_user(&state.storage, "ana", UserRole::User).await;
    let news = create_item(&state.storage, ContentKind::News, "Not a job").await;

    let res = send(
        &state,
        post_form(&format!("/empregos/curtida/{}", news.public_id), Some(&session_cookie(&user)), ""),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_page_redirects_signed_in_users() {
    let state = state().await;
    let user = create_user(&state.storage, "ana", UserRole::User).await;

    let res = send(&state, get("/login", Some(&session_cookie(&user)))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let res = send(&state, get("/register", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["view"], "register");
}

#[tokio::test]
async fn logout_clears_cookie_permanently_redirecting_home() {
    let state = state().await;

    let res = send(&state, get("/deslogar", None)).await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(location(&res), "/");
    let set_cookie = res.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("tokenJWT="));
}

#[tokio::test]
async fn register_then_login_sets_session_cookie() {
    let state = state().await;

    let res = send(
        &state,
        post_form("/register", None, "username=carla&email=carla%40portal.test&password=segredo1"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");
    let set_cookie = res.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("tokenJWT="));
    assert!(set_cookie.contains("HttpOnly"));

    // The issued cookie identifies the new user.
    let pair = set_cookie.split(';').next().unwrap();
    let body = json_body(send(&state, get("/", Some(pair))).await).await;
    assert_eq!(body["data"]["current_user"]["username"], "carla");
    assert_eq!(body["data"]["current_user"]["role"], "user");

    let res = send(&state, post_form("/login", None, "login_id=carla%40portal.test&password=segredo1")).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(res.headers().contains_key(header::SET_COOKIE));

    let res = send(&state, post_form("/login", None, "login_id=carla&password=wrong-one")).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(res).await["view"], "error");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let state = state().await;
    create_user(&state.storage, "carla", UserRole::User).await;

    let res = send(
        &state,
        post_form("/register", None, "username=carla&email=other%40portal.test&password=segredo1"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn health_check_responds() {
    let state = state().await;
    let res = send(&state, get("/health", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
}
