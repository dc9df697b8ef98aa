//! UPI deep-link and QR-code URL construction for event payments.

#[cfg(test)]
#[path = "upi_test.rs"]
mod upi_test;

/// Build a `upi://pay` deep link for the given payee and amount (INR).
pub fn payment_link(upi_id: &str, payee_name: &str, amount: u32) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={amount}&cu=INR",
        urlencoding::encode(upi_id),
        urlencoding::encode(payee_name),
    )
}

/// URL of a QR-code image encoding the given UPI link.
pub fn qr_code_url(upi_link: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?data={}&size=200x200",
        urlencoding::encode(upi_link)
    )
}
