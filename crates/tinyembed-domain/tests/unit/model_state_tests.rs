//! Unit tests for the session model state

use tinyembed_domain::{EncodingFormat, HardwareCapabilities, ModelState};

#[test]
fn test_default_state_is_uninitialized() {
    assert_eq!(ModelState::default(), ModelState::Uninitialized);
    assert_eq!(ModelState::default().name(), "uninitialized");
}

#[test]
fn test_load_allowed_states() {
    assert!(!ModelState::Uninitialized.can_load());
    assert!(ModelState::CapabilityChecked.can_load());
    assert!(
        !ModelState::Loading {
            model: "m".to_string()
        }
        .can_load()
    );
    assert!(
        ModelState::Ready {
            model: "m".to_string(),
            format: EncodingFormat::Float
        }
        .can_load()
    );
    assert!(
        ModelState::Failed {
            message: "x".to_string()
        }
        .can_load()
    );
}

#[test]
fn test_loaded_model() {
    let ready = ModelState::Ready {
        model: "nomic-embed-text".to_string(),
        format: EncodingFormat::Base64,
    };
    assert!(ready.is_ready());
    assert_eq!(ready.loaded_model(), Some("nomic-embed-text"));
    assert_eq!(ready.to_string(), "model-ready");
    assert_eq!(ModelState::CapabilityChecked.loaded_model(), None);
}

#[test]
fn test_capability_status_strings() {
    let caps = HardwareCapabilities {
        accelerator_available: Some(true),
        fp16_supported: Some(false),
        backend: "webgpu".to_string(),
    };
    assert_eq!(caps.accelerator_status(), "available");
    assert_eq!(caps.fp16_status(), "not supported");

    let unknown = HardwareCapabilities::unknown("cpu");
    assert_eq!(unknown.accelerator_status(), "unknown");
    assert_eq!(unknown.fp16_status(), "unknown");
    assert_eq!(unknown.backend, "cpu");
}
