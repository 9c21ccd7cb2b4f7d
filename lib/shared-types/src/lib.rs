mod macros;
mod signature_id;
mod signature_request_id;

pub use signature_id::SignatureId;
pub use signature_request_id::SignatureRequestId;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_string_newtype_conversions() {
        let id: SignatureRequestId = "fa5c8a0b0f492d768749333ad6fcc214c111e967".parse().unwrap();
        assert_eq!(id, "fa5c8a0b0f492d768749333ad6fcc214c111e967");
        assert_eq!(id.to_string(), id.as_str());

        let inner: String = id.clone().into();
        assert_eq!(SignatureRequestId::from(inner), id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = SignatureId::from("78caf2a1d01cd39cea2bc1cbb340dac3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"78caf2a1d01cd39cea2bc1cbb340dac3\"");
        assert_eq!(serde_json::from_str::<SignatureId>(&json).unwrap(), id);
    }
}
