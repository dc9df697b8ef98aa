use super::*;

#[test]
fn payment_link_encodes_payee_fields() {
    let link = payment_link("events@okicici", "College Events", 99);
    assert_eq!(
        link,
        "upi://pay?pa=events%40okicici&pn=College%20Events&am=99&cu=INR"
    );
}

#[test]
fn qr_code_url_percent_encodes_the_link() {
    let url = qr_code_url("upi://pay?pa=a&am=1");
    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?data=upi%3A%2F%2Fpay"));
    assert!(url.ends_with("&size=200x200"));
}
