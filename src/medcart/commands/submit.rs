use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MedcartError, Result};
use crate::quote::{self, ContactForm};
use crate::relay::RelayClient;
use crate::store::CartStore;

/// Submits the request list as a quote request.
///
/// Validation runs first and aborts without any network traffic. One
/// request then goes to the relay; on success the result carries the
/// submitted lines for the confirmation view. The cart itself is NOT
/// cleared here: the caller keeps the confirmation visible for
/// [`crate::session::CONFIRMATION_TTL`] and clears afterwards. On any
/// failure the cart and form are left untouched so the user can retry.
pub async fn run<S: CartStore>(
    cart: &mut Cart<S>,
    relay: &RelayClient,
    form: &ContactForm,
) -> Result<CmdResult> {
    if cart.is_empty() {
        return Err(MedcartError::Validation(
            "Your request list is empty".into(),
        ));
    }
    quote::validate(form)?;

    let summary = quote::render_summary(cart.lines());
    relay.send_quote(form, &summary).await?;

    let submitted = cart.lines().to_vec();
    let mut result = CmdResult::default().with_cart_lines(submitted);
    result.add_message(CmdMessage::success(
        "Quote request sent. We will get back to you shortly.",
    ));
    Ok(result)
}
