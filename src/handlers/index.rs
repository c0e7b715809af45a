use axum::{extract::Extension, response::Html};
use std::sync::Arc;

use crate::server::{State, StoreAvailability};

/// Handler for `GET /`
pub(crate) async fn index(Extension(state): Extension<Arc<State>>) -> Html<String> {
    Html(render_index(state.availability))
}

fn render_index(availability: StoreAvailability) -> String {
    let (db_status, background, color) = match availability {
        StoreAvailability::Available => ("Connected", "#d4edda", "#155724"),
        StoreAvailability::Unavailable => ("Not Available (Demo Mode)", "#f8d7da", "#721c24"),
    };

    format!(
        r#"<html>
    <head>
        <title>User Service</title>
        <style>
            body {{ font-family: Arial, sans-serif; margin: 40px; }}
            h1 {{ color: #333; }}
            a {{ color: #007cba; text-decoration: none; margin-right: 20px; }}
            a:hover {{ text-decoration: underline; }}
            .status {{ background: #f0f0f0; padding: 20px; border-radius: 5px; margin-top: 20px; }}
            .db-status {{ background: {background}; color: {color}; padding: 10px; border-radius: 5px; margin: 10px 0; }}
        </style>
    </head>
    <body>
        <h1>User Service</h1>
        <p>A small user directory backed by PostgreSQL, built and deployed by the CI/CD pipeline.</p>

        <div class="db-status">
            <strong>Database Status:</strong> {db_status}
        </div>

        <div class="status">
            <h3>Available Endpoints:</h3>
            <p><a href="/health">Health Check</a> - Application and database status</p>
            <p><a href="/users">View Users</a> - List all users (JSON)</p>
            <p><strong>POST /users</strong> - Create new user (requires JSON: {{"name": "...", "email": "..."}})</p>
        </div>

        <div class="status">
            <h3>Pipeline Features Demonstrated:</h3>
            <ul>
                <li>Container image built in CI</li>
                <li>PostgreSQL integration with a sidecar database</li>
                <li>Automated tests with result collection</li>
                <li>Conditional deployment (main branch only)</li>
                <li>Graceful degradation when no database is reachable</li>
            </ul>
        </div>
    </body>
</html>
"#
    )
}
