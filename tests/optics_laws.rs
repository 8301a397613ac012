#![cfg(feature = "optics")]
//! Property-based tests for the lens and prism laws.

use fpcomb::control::Either;
use fpcomb::optics::{Lens, Prism, right_prism, some_prism};
use fpcomb::{lens, prism};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
}

#[derive(Clone, Debug, PartialEq)]
struct Service {
    name: String,
    endpoint: Endpoint,
}

#[derive(Clone, Debug, PartialEq)]
enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

fn service_strategy() -> impl Strategy<Value = Service> {
    ("[a-z]{1,8}", "[a-z.]{1,12}", any::<u16>()).prop_map(|(name, host, port)| Service {
        name,
        endpoint: Endpoint { host, port },
    })
}

fn payload_strategy() -> impl Strategy<Value = Payload> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Payload::Text),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Payload::Binary),
    ]
}

proptest! {
    #[test]
    fn prop_lens_get_set(service in service_strategy()) {
        let name = lens!(Service, name);
        let current = name.get(&service).clone();
        prop_assert_eq!(name.set(service.clone(), current), service);
    }

    #[test]
    fn prop_lens_set_get(service in service_strategy(), replacement in "[a-z]{1,8}") {
        let name = lens!(Service, name);
        let updated = name.set(service, replacement.clone());
        prop_assert_eq!(name.get(&updated), &replacement);
    }

    #[test]
    fn prop_lens_set_set(service in service_strategy(), first: u16, second: u16) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let twice = port.set(port.set(service.clone(), first), second);
        prop_assert_eq!(twice, port.set(service, second));
    }

    #[test]
    fn prop_composed_lens_modify(service in service_strategy()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let expected = service.endpoint.port.wrapping_add(1);
        prop_assert_eq!(*port.get(&port.modify(service, |p| p.wrapping_add(1))), expected);
    }

    #[test]
    fn prop_prism_review_preview(text in "[a-z]{0,8}") {
        let text_prism = prism!(Payload, Text);
        prop_assert_eq!(text_prism.preview_owned(text_prism.review(text.clone())), Some(text));
    }

    #[test]
    fn prop_prism_preview_review(payload in payload_strategy()) {
        let text_prism = prism!(Payload, Text);
        if let Some(text) = text_prism.preview(&payload) {
            prop_assert_eq!(text_prism.review(text.clone()), payload.clone());
        }
    }

    #[test]
    fn prop_prism_modify_or_identity_leaves_other_variants(payload in payload_strategy()) {
        let text_prism = prism!(Payload, Text);
        let modified = text_prism.modify_or_identity(payload.clone(), |text| text.to_uppercase());
        match payload {
            Payload::Text(text) => {
                prop_assert_eq!(modified, Payload::Text(text.to_uppercase()));
            }
            binary @ Payload::Binary(_) => {
                prop_assert_eq!(modified, binary);
            }
        }
    }

    #[test]
    fn prop_either_and_option_prisms(value: i32) {
        let right = right_prism::<String, i32>();
        prop_assert_eq!(right.preview_owned(right.review(value)), Some(value));
        let refused = Either::Left("no".to_string());
        prop_assert_eq!(right.preview(&refused), None);
        let some = some_prism::<Option<i32>>().compose(some_prism::<i32>());
        prop_assert_eq!(some.preview_owned(Some(Some(value))), Some(value));
    }
}
