//! Tests for outcome serialization

#[cfg(feature = "serde")]
mod serde_tests {
    use deferred_outcome::Outcome;

    #[test]
    fn test_serde_outcome_json_shape() {
        let ok: Outcome<u32, String> = Outcome::success(15);
        let json = serde_json::to_string(&ok).expect("serialize");
        assert_eq!(json, r#"{"Success":15}"#);

        let failed: Outcome<u32, String> = serde_json::from_str(r#"{"Failure":"DidFail"}"#).expect("deserialize");
        assert_eq!(failed, Outcome::Failure("DidFail".to_string()));
    }

    #[test]
    fn test_serde_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<Outcome<u32, String>>(r#"{"Pending":null}"#);
        assert!(parsed.is_err());
    }
}
