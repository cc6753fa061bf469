//! Wire-format method dispatch surface.
//!
//! The host app layer talks to the controller through a four-method
//! call surface with JSON arguments: `changeIcon`, `getCurrentIcon`,
//! `getSupportedIcons`, `isSupported`. Errors cross the wire as
//! stable codes plus a human-readable message; `null` stands for the
//! default icon on both sides.

use serde_json::{Value, json};
use tracing::debug;

use iconshift_core::{ChangeOptions, Error, IconId, IconSwitchController};

pub const METHOD_CHANGE_ICON: &str = "changeIcon";
pub const METHOD_GET_CURRENT_ICON: &str = "getCurrentIcon";
pub const METHOD_GET_SUPPORTED_ICONS: &str = "getSupportedIcons";
pub const METHOD_IS_SUPPORTED: &str = "isSupported";

pub const CODE_INVALID_ICON: &str = "INVALID_ICON";
pub const CODE_UNSUPPORTED: &str = "UNSUPPORTED";
pub const CODE_ICON_CHANGE_FAILED: &str = "ICON_CHANGE_FAILED";
pub const CODE_PRIVATE_API_UNAVAILABLE: &str = "PRIVATE_API_UNAVAILABLE";
pub const CODE_STORE_ERROR: &str = "STORE_ERROR";

/// Outcome of one method call.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// The call succeeded; `Value::Null` for void methods.
    Success(Value),
    /// The call failed with a stable code.
    Error { code: &'static str, message: String },
    /// The method name is not part of the surface.
    NotImplemented,
}

impl MethodResponse {
    fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }

    /// Wire representation, for printing or transport.
    pub fn to_json(&self) -> Value {
        match self {
            MethodResponse::Success(result) => json!({ "status": "ok", "result": result }),
            MethodResponse::Error { code, message } => {
                json!({ "status": "error", "code": code, "message": message })
            }
            MethodResponse::NotImplemented => json!({ "status": "notImplemented" }),
        }
    }
}

/// Dispatch one method call against the controller.
pub fn handle(controller: &IconSwitchController, method: &str, args: &Value) -> MethodResponse {
    debug!(method, "dispatching method call");
    match method {
        METHOD_CHANGE_ICON => change_icon(controller, args),
        METHOD_GET_CURRENT_ICON => match controller.current_icon() {
            Ok(icon) => MethodResponse::Success(json!(icon.as_ref().map(IconId::as_str))),
            Err(err) => error_response(err),
        },
        METHOD_GET_SUPPORTED_ICONS => {
            let names: Vec<String> = controller
                .supported_icons()
                .into_iter()
                .map(String::from)
                .collect();
            MethodResponse::Success(json!(names))
        }
        METHOD_IS_SUPPORTED => MethodResponse::Success(json!(controller.is_supported())),
        _ => MethodResponse::NotImplemented,
    }
}

fn change_icon(controller: &IconSwitchController, args: &Value) -> MethodResponse {
    // null/absent iconName means "switch to the default icon".
    let icon = match args.get("iconName") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => match IconId::new(name.clone()) {
            Ok(id) => Some(id),
            Err(err) => return MethodResponse::error(CODE_INVALID_ICON, err.to_string()),
        },
        Some(other) => {
            return MethodResponse::error(
                CODE_INVALID_ICON,
                format!("iconName must be a string or null, got {other}"),
            );
        }
    };
    let silent = args
        .get("silent")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match controller.request_icon_change(icon, ChangeOptions { silent }) {
        Ok(()) => MethodResponse::Success(Value::Null),
        Err(err) => error_response(err),
    }
}

fn error_response(err: Error) -> MethodResponse {
    let code = match &err {
        Error::InvalidIcon { .. } => CODE_INVALID_ICON,
        Error::Unsupported => CODE_UNSUPPORTED,
        Error::PrivateApiUnavailable => CODE_PRIVATE_API_UNAVAILABLE,
        Error::ApplyFailed { .. } => CODE_ICON_CHANGE_FAILED,
        Error::Store(_) => CODE_STORE_ERROR,
    };
    MethodResponse::error(code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconshift_core::{ComponentBinding, MemoryApplier, MemoryStore, StaticCatalog};

    fn controller() -> (IconSwitchController, MemoryApplier) {
        let applier = MemoryApplier::new(["app.Main", "app.Red", "app.Blue"]);
        applier.force_state("app.Main", true);
        let catalog = StaticCatalog::new(vec![
            ComponentBinding::default_icon("app.Main"),
            ComponentBinding::alternate("app.Red", IconId::new("red").unwrap()),
            ComponentBinding::alternate("app.Blue", IconId::new("blue").unwrap()),
        ]);
        let ctrl = IconSwitchController::new(
            Box::new(catalog),
            Box::new(MemoryStore::new()),
            Box::new(applier.clone()),
        );
        (ctrl, applier)
    }

    #[test]
    fn test_change_icon_success() {
        let (ctrl, _) = controller();
        let resp = handle(
            &ctrl,
            METHOD_CHANGE_ICON,
            &json!({ "iconName": "red", "silent": false }),
        );
        assert_eq!(resp, MethodResponse::Success(Value::Null));
    }

    #[test]
    fn test_change_icon_null_requests_default() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, METHOD_CHANGE_ICON, &json!({ "iconName": null }));
        assert_eq!(resp, MethodResponse::Success(Value::Null));
    }

    #[test]
    fn test_change_icon_unknown_maps_to_invalid_icon() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, METHOD_CHANGE_ICON, &json!({ "iconName": "green" }));
        match resp {
            MethodResponse::Error { code, message } => {
                assert_eq!(code, CODE_INVALID_ICON);
                assert!(message.contains("green"));
                assert!(message.contains("blue, red"), "lists available icons");
            }
            other => panic!("expected error response, got {other:?}"),
        }
    }

    #[test]
    fn test_change_icon_empty_name_rejected() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, METHOD_CHANGE_ICON, &json!({ "iconName": "" }));
        assert!(matches!(
            resp,
            MethodResponse::Error { code: CODE_INVALID_ICON, .. }
        ));
    }

    #[test]
    fn test_change_icon_bad_arg_type_rejected() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, METHOD_CHANGE_ICON, &json!({ "iconName": 7 }));
        assert!(matches!(
            resp,
            MethodResponse::Error { code: CODE_INVALID_ICON, .. }
        ));
    }

    #[test]
    fn test_get_current_icon_null_for_default() {
        let (ctrl, applier) = controller();
        let resp = handle(&ctrl, METHOD_GET_CURRENT_ICON, &Value::Null);
        assert_eq!(resp, MethodResponse::Success(Value::Null));

        applier.force_state("app.Main", false);
        applier.force_state("app.Blue", true);
        let resp = handle(&ctrl, METHOD_GET_CURRENT_ICON, &Value::Null);
        assert_eq!(resp, MethodResponse::Success(json!("blue")));
    }

    #[test]
    fn test_get_supported_icons_excludes_default() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, METHOD_GET_SUPPORTED_ICONS, &Value::Null);
        assert_eq!(resp, MethodResponse::Success(json!(["blue", "red"])));
    }

    #[test]
    fn test_is_supported() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, METHOD_IS_SUPPORTED, &Value::Null);
        assert_eq!(resp, MethodResponse::Success(json!(true)));
    }

    #[test]
    fn test_unknown_method_not_implemented() {
        let (ctrl, _) = controller();
        let resp = handle(&ctrl, "resetIcon", &Value::Null);
        assert_eq!(resp, MethodResponse::NotImplemented);
        assert_eq!(resp.to_json(), json!({ "status": "notImplemented" }));
    }
}
