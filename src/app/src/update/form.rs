use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::post_json;
use crate::types::{is_valid_mac_address, AddEndpointRequest, AddEndpointResponse, Feedback};
use crate::update_field;
use crate::Effect;

use super::ui::show_feedback;

pub const ADD_ENDPOINT_PATH: &str = "/api/add-endpoint";
pub const INVALID_MAC_MESSAGE: &str = "Please enter a valid MAC address";
pub const ENDPOINT_ADDED_MESSAGE: &str = "Endpoint added successfully!";

/// Handle form events (input changes, submit, submit response)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::MacAddressChanged { value } => update_field!(model.mac_address, value),
        Event::AddEndpoint => handle_add_endpoint(model),
        Event::AddEndpointResponse(result) => handle_add_endpoint_response(result, model),
        _ => unreachable!("Non-form event passed to form handler"),
    }
}

/// Validate the input and post it to the backend
///
/// Invalid input never reaches the network and leaves the button alone.
fn handle_add_endpoint(model: &mut Model) -> Command<Effect, Event> {
    if model.is_submitting() {
        log::debug!("add endpoint already in flight, ignoring submit");
        return Command::done();
    }

    let mac_address = model.trimmed_mac_address().to_string();

    if !is_valid_mac_address(&mac_address) {
        return show_feedback(model, Feedback::error(INVALID_MAC_MESSAGE));
    }

    let request = AddEndpointRequest { mac_address };
    model.add_button.set_busy();

    post_json!(ADD_ENDPOINT_PATH, AddEndpointResponse, "Add endpoint",
        body_json: &request,
        expect_json: AddEndpointResponse,
        on_build_error: |message| {
            model.add_button.reset();
            show_feedback(model, Feedback::error(format!("An error occurred: {message}")))
        })
}

/// Settle a submission: pick the feedback branch, then release the button
fn handle_add_endpoint_response(
    result: Result<AddEndpointResponse, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let feedback_cmd = match result {
        Ok(response) if response.success => {
            model.mac_address.clear();
            show_feedback(model, Feedback::success(ENDPOINT_ADDED_MESSAGE))
        }
        Ok(response) => {
            show_feedback(model, Feedback::error(format!("Error: {}", response.message)))
        }
        Err(e) => {
            log::error!("add endpoint failed: {e}");
            show_feedback(model, Feedback::error(format!("An error occurred: {e}")))
        }
    };

    model.add_button.reset();

    feedback_cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeedbackKind, ADD_BUTTON_BUSY_LABEL, ADD_BUTTON_LABEL};
    use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};

    fn submitting_model(mac_address: &str) -> Model {
        let mut model = Model {
            mac_address: mac_address.to_string(),
            ..Default::default()
        };
        model.add_button.set_busy();
        model
    }

    fn http_requests(cmd: &mut Command<Effect, Event>) -> Vec<HttpRequest> {
        cmd.effects()
            .filter_map(|effect| match effect {
                Effect::Http(request) => Some(request.operation.clone()),
                _ => None,
            })
            .collect()
    }

    mod input {
        use super::*;

        #[test]
        fn change_updates_raw_value() {
            let mut model = Model::default();

            let _ = handle(
                Event::MacAddressChanged {
                    value: " 00:11:22:33:44:55 ".to_string(),
                },
                &mut model,
            );

            assert_eq!(model.mac_address, " 00:11:22:33:44:55 ");
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn invalid_address_shows_error_without_request() {
            let mut model = Model {
                mac_address: "GG:BB:CC:DD:EE:FF".to_string(),
                ..Default::default()
            };

            let mut cmd = handle(Event::AddEndpoint, &mut model);

            assert!(http_requests(&mut cmd).is_empty());
            assert!(!model.is_submitting());
            assert_eq!(model.add_button.label, ADD_BUTTON_LABEL);
            assert_eq!(model.feedback, Some(Feedback::error(INVALID_MAC_MESSAGE)));
            assert_eq!(model.mac_address, "GG:BB:CC:DD:EE:FF");
        }

        #[test]
        fn empty_input_is_rejected() {
            let mut model = Model {
                mac_address: "   ".to_string(),
                ..Default::default()
            };

            let mut cmd = handle(Event::AddEndpoint, &mut model);

            assert!(http_requests(&mut cmd).is_empty());
            assert_eq!(model.feedback, Some(Feedback::error(INVALID_MAC_MESSAGE)));
        }

        #[test]
        fn valid_address_posts_trimmed_input_once() {
            let mut model = Model {
                mac_address: "  00-11-22-33-44-55\t".to_string(),
                ..Default::default()
            };

            let mut cmd = handle(Event::AddEndpoint, &mut model);
            let requests = http_requests(&mut cmd);

            assert_eq!(requests.len(), 1);
            let request = &requests[0];
            assert_eq!(request.method, "POST");
            assert_eq!(request.url, "https://relative/api/add-endpoint");
            assert!(request.headers.iter().any(|header| {
                header.name.eq_ignore_ascii_case("content-type")
                    && header.value == "application/json"
            }));
            let body: AddEndpointRequest = serde_json::from_slice(&request.body).unwrap();
            assert_eq!(body.mac_address, "00-11-22-33-44-55");
        }

        #[test]
        fn valid_address_marks_button_busy() {
            let mut model = Model {
                mac_address: "aabbccddeeff".to_string(),
                feedback: Some(Feedback::error("old")),
                ..Default::default()
            };

            let _ = handle(Event::AddEndpoint, &mut model);

            assert!(model.is_submitting());
            assert_eq!(model.add_button.label, ADD_BUTTON_BUSY_LABEL);
            assert_eq!(model.feedback, Some(Feedback::error("old")));
        }

        #[test]
        fn submit_while_in_flight_is_ignored() {
            let mut model = submitting_model("aabbccddeeff");

            let mut cmd = handle(Event::AddEndpoint, &mut model);

            assert!(http_requests(&mut cmd).is_empty());
            assert!(model.is_submitting());
        }
    }

    mod response {
        use super::*;

        #[test]
        fn success_clears_input_and_releases_button() {
            let mut model = submitting_model("00:11:22:33:44:55");

            let _ = handle(
                Event::AddEndpointResponse(Ok(AddEndpointResponse {
                    success: true,
                    message: "Endpoint added successfully".to_string(),
                })),
                &mut model,
            );

            assert_eq!(model.mac_address, "");
            assert!(!model.is_submitting());
            assert_eq!(model.add_button.label, ADD_BUTTON_LABEL);
            assert_eq!(
                model.feedback,
                Some(Feedback::success(ENDPOINT_ADDED_MESSAGE))
            );
        }

        #[test]
        fn business_failure_keeps_input() {
            let mut model = submitting_model("00:11:22:33:44:55");

            let _ = handle(
                Event::AddEndpointResponse(Ok(AddEndpointResponse {
                    success: false,
                    message: "endpoint already exists".to_string(),
                })),
                &mut model,
            );

            assert_eq!(model.mac_address, "00:11:22:33:44:55");
            assert!(!model.is_submitting());
            assert_eq!(
                model.feedback,
                Some(Feedback::error("Error: endpoint already exists"))
            );
        }

        #[test]
        fn transport_failure_keeps_input() {
            let mut model = submitting_model("00:11:22:33:44:55");

            let _ = handle(
                Event::AddEndpointResponse(Err("Add endpoint failed: network down".to_string())),
                &mut model,
            );

            assert_eq!(model.mac_address, "00:11:22:33:44:55");
            assert!(!model.is_submitting());
            assert_eq!(model.add_button.label, ADD_BUTTON_LABEL);
            assert_eq!(
                model.feedback.as_ref().map(|f| f.text.as_str()),
                Some("An error occurred: Add endpoint failed: network down")
            );
        }

        #[test]
        fn only_success_schedules_expiry() {
            let mut success_model = submitting_model("aabbccddeeff");
            let mut success_cmd = handle(
                Event::AddEndpointResponse(Ok(AddEndpointResponse {
                    success: true,
                    message: String::new(),
                })),
                &mut success_model,
            );
            assert!(success_cmd
                .effects()
                .any(|effect| matches!(effect, Effect::Timer(_))));

            let mut error_model = submitting_model("aabbccddeeff");
            let mut error_cmd = handle(
                Event::AddEndpointResponse(Err("boom".to_string())),
                &mut error_model,
            );
            assert!(!error_cmd
                .effects()
                .any(|effect| matches!(effect, Effect::Timer(_))));
            assert_eq!(
                error_model.feedback.map(|f| f.kind),
                Some(FeedbackKind::Error)
            );
        }
    }

    mod round_trip {
        use super::*;

        fn resolve_add_endpoint(model: &mut Model, response: HttpResponse) -> Vec<Event> {
            let mut cmd = handle(Event::AddEndpoint, model);
            let mut request = cmd
                .effects()
                .find_map(|effect| match effect {
                    Effect::Http(request) => Some(request),
                    _ => None,
                })
                .expect("http effect");

            request
                .resolve(HttpResult::Ok(response))
                .expect("http request resolves");

            cmd.events().collect()
        }

        #[test]
        fn server_success_flows_back_as_response_event() {
            let mut model = Model {
                mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
                ..Default::default()
            };

            let events = resolve_add_endpoint(
                &mut model,
                HttpResponse::ok()
                    .body(r#"{"success":true,"message":"Endpoint added successfully"}"#)
                    .build(),
            );

            assert_eq!(
                events,
                vec![Event::AddEndpointResponse(Ok(AddEndpointResponse {
                    success: true,
                    message: "Endpoint added successfully".to_string(),
                }))]
            );
        }

        #[test]
        fn non_2xx_status_is_a_transport_failure_with_server_message() {
            let mut model = Model {
                mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
                ..Default::default()
            };

            let events = resolve_add_endpoint(
                &mut model,
                HttpResponse::status(500)
                    .body(r#"{"success":false,"message":"Failed to add endpoint: timeout"}"#)
                    .build(),
            );

            assert_eq!(
                events,
                vec![Event::AddEndpointResponse(Err(
                    "Failed to add endpoint: timeout".to_string()
                ))]
            );
        }

        #[test]
        fn non_json_error_body_falls_back_to_status() {
            let mut model = Model {
                mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
                ..Default::default()
            };

            let events = resolve_add_endpoint(
                &mut model,
                HttpResponse::status(500)
                    .body("<html>Internal Server Error</html>")
                    .build(),
            );

            assert_eq!(
                events,
                vec![Event::AddEndpointResponse(Err(
                    "Add endpoint failed: HTTP 500".to_string()
                ))]
            );
        }

        #[test]
        fn rejected_address_shows_server_message() {
            let mut model = Model {
                mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
                ..Default::default()
            };

            let events = resolve_add_endpoint(
                &mut model,
                HttpResponse::status(400)
                    .body(r#"{"success":false,"message":"MAC address is required"}"#)
                    .build(),
            );
            for event in events {
                let _ = handle(event, &mut model);
            }

            assert_eq!(
                model.feedback,
                Some(Feedback::error("An error occurred: MAC address is required"))
            );
            assert!(!model.is_submitting());
            assert_eq!(model.mac_address, "aa:bb:cc:dd:ee:ff");
        }

        #[test]
        fn unexpected_body_shape_is_a_transport_failure() {
            let mut model = Model {
                mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
                ..Default::default()
            };

            let events = resolve_add_endpoint(
                &mut model,
                HttpResponse::ok().body("<html></html>").build(),
            );

            assert!(matches!(
                events.as_slice(),
                [Event::AddEndpointResponse(Err(message))] if message.starts_with("Add endpoint: JSON parse error")
            ));
        }
    }
}
