use folio_derive::content_model;

#[content_model]
pub struct Interest {
    pub display_name: String,
    pub icon: Option<String>,
}

#[content_model(deny_unknown_fields = true)]
pub struct ContactRequest {
    pub email: String,
}

fn main() {
    let interest: Interest =
        serde_json::from_str(r#"{"_type":"interest","displayName":"Gaming","icon":"gamepad"}"#).unwrap();
    assert_eq!(interest.display_name, "Gaming");

    let strict = serde_json::from_str::<ContactRequest>(r#"{"email":"a@b.co","extra":1}"#);
    assert!(strict.is_err());
}
