use crate::{
    middleware::CurrentSession,
    view::{self, IndexTemplate, LoginTemplate, MembersTemplate, NotFoundTemplate, SignupTemplate},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use rand::seq::IndexedRandom;

/// Fixed set of display assets for the members page; one is picked at random
/// per request.
const MEMBER_IMAGES: &[&str] = &["duck.jpg", "minecraft_house.jpg", "snowmen.jpg"];

pub async fn index(CurrentSession(user): CurrentSession) -> Response {
    view::render(&IndexTemplate { user }, StatusCode::OK)
}

pub async fn signup_form() -> Response {
    view::render(&SignupTemplate { error: None }, StatusCode::OK)
}

pub async fn login_form() -> Response {
    view::render(&LoginTemplate { error: None }, StatusCode::OK)
}

/// Members page. Anonymous callers go back to the landing page, not to
/// `/login`; the admin gate handles that redirect differently on purpose.
pub async fn members(CurrentSession(user): CurrentSession) -> Response {
    let Some(user) = user else {
        return Redirect::to("/").into_response();
    };

    let image = MEMBER_IMAGES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(MEMBER_IMAGES[0]);

    view::render(&MembersTemplate { user, image }, StatusCode::OK)
}

pub async fn not_found(CurrentSession(user): CurrentSession) -> Response {
    view::render(&NotFoundTemplate { user }, StatusCode::NOT_FOUND)
}
