use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use testify_core::health::healthz;
use testify_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::crud::{self, Resource};
use crate::handlers::health::readyz;
use crate::handlers::resources::{
    AppUsers, Assignments, Autotesters, Configurations, CourseTeachers, Courses, Enrollments,
    GradingElements, StudentAssignments, StudentGradingElements, UserRoles,
};
use crate::state::AppState;

const API_BASE: &str = "/api/v1/admin";

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz));

    let router = resource_routes::<UserRoles>(router);
    let router = resource_routes::<AppUsers>(router);
    let router = resource_routes::<Courses>(router);
    let router = resource_routes::<CourseTeachers>(router);
    let router = resource_routes::<Enrollments>(router);
    let router = resource_routes::<Autotesters>(router);
    let router = resource_routes::<Assignments>(router);
    let router = resource_routes::<GradingElements>(router);
    let router = resource_routes::<StudentAssignments>(router);
    let router = resource_routes::<StudentGradingElements>(router);
    let router = resource_routes::<Configurations>(router);

    router
        // Natural-key lookups
        .route(
            &format!("{API_BASE}/user-role/name/{{name}}"),
            get(crud::get_by_natural_key::<UserRoles>),
        )
        .route(
            &format!("{API_BASE}/user/email/{{email}}"),
            get(crud::get_by_natural_key::<AppUsers>),
        )
        .route(
            &format!("{API_BASE}/configuration/key/{{key}}"),
            get(crud::get_by_natural_key::<Configurations>),
        )
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}

/// Mount the list/create and get/update/delete routes of one resource family.
fn resource_routes<R: Resource>(router: Router<AppState>) -> Router<AppState> {
    let base = format!("{API_BASE}/{}", R::SEGMENT);
    router
        .route(&base, get(crud::list::<R>).post(crud::create::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(crud::get_by_id::<R>)
                .put(crud::update::<R>)
                .delete(crud::delete::<R>),
        )
}
