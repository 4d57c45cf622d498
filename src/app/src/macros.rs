/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.mac_address, value)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.mac_address, String::new();
///     model.feedback, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{build_url, map_http_error, process_json_response, BASE_URL};

/// Macro for POST requests with a JSON body expecting a JSON response.
///
/// Renders immediately and sends `$response_event` with the parsed body, or
/// an error string for non-2xx statuses, transport and parse failures.
/// If the body cannot be serialized, `$on_build_error` is evaluated with the
/// error message instead.
///
/// # Example
/// ```ignore
/// post_json!("/api/add-endpoint", AddEndpointResponse, "Add endpoint",
///     body_json: &request,
///     expect_json: AddEndpointResponse,
///     on_build_error: |message| handle_build_error(model, message))
/// ```
#[macro_export]
macro_rules! post_json {
    ($endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty, on_build_error: |$message:ident| $on_error:expr) => {{
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result: Result<$response_type, String> =
                        $crate::process_json_response($action, result);
                    $crate::events::Event::$response_event(event_result)
                }),
            ]),
            Err(e) => {
                let $message = format!("Failed to create {} request: {}", $action, e);
                $on_error
            }
        }
    }};
}
