//! Session and cart state owner.
//!
//! [`SessionCartStore`] owns the signed-in session, the pending OTP
//! challenge, the cart and the current notice. Every user action is a
//! `&mut self` transition that runs to completion; none of them fail. The
//! outcome of each action is reported through [`SessionCartStore::notice`].

use tracing::{debug, info, instrument, warn};

use fresh_farm_core::{Notice, PhoneNumber, Price, ProductId, SessionId};

use crate::catalog::Catalog;
use crate::models::{
    AuthSession, AuthStep, Cart, CartItemView, CartView, PendingChallenge, ResolvedLine,
    cart_total,
};
use crate::services::otp::{CodeGenerator, RandomCodeGenerator};

/// Notice texts shown to the user.
pub mod messages {
    pub const INVALID_PHONE: &str = "Invalid Bangladeshi phone";
    pub const NO_OTP_SENT: &str = "No OTP sent";
    pub const INVALID_OTP: &str = "Invalid OTP";
    pub const SIGNED_IN: &str = "Signed in";
    pub const SIGN_IN_FIRST: &str = "Sign in first";
    pub const ADDED_TO_CART: &str = "Added to cart";
    pub const HELP_COMING_SOON: &str = "Help coming soon!";
    pub const TERMS_COMING_SOON: &str = "Terms & Conditions coming soon!";

    /// Prefix of the notice that carries the demo code.
    pub const DEMO_OTP_PREFIX: &str = "Demo OTP: ";

    /// The demo build shows the code instead of sending an SMS.
    #[must_use]
    pub fn demo_otp(code: &str) -> String {
        format!("{DEMO_OTP_PREFIX}{code}")
    }
}

/// Authentication, OTP challenge, cart and notice state for one session.
#[derive(Debug, Clone)]
pub struct SessionCartStore<G = RandomCodeGenerator> {
    session_id: SessionId,
    codes: G,
    auth: Option<AuthSession>,
    pending: Option<PendingChallenge>,
    cart: Cart,
    notice: Option<Notice>,
}

impl SessionCartStore<RandomCodeGenerator> {
    /// Create a signed-out store with an empty cart and random OTP codes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(RandomCodeGenerator)
    }
}

impl Default for SessionCartStore<RandomCodeGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator> SessionCartStore<G> {
    /// Create a signed-out store that draws OTP codes from `codes`.
    #[must_use]
    pub fn with_generator(codes: G) -> Self {
        let session_id = SessionId::generate();
        debug!(session = %session_id, "Session store created");
        Self {
            session_id,
            codes,
            auth: None,
            pending: None,
            cart: Cart::new(),
            notice: None,
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Issue a sign-in code for `phone_input`.
    ///
    /// An invalid number only sets an error notice. A valid one replaces any
    /// pending challenge and shows the code in an info notice.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub fn request_otp(&mut self, phone_input: &str) {
        let phone = match PhoneNumber::parse(phone_input) {
            Ok(phone) => phone,
            Err(e) => {
                debug!(error = %e, "Rejected phone number");
                self.notice = Some(Notice::error(messages::INVALID_PHONE));
                return;
            }
        };

        let code = self.codes.generate();
        self.notice = Some(Notice::info(messages::demo_otp(code.as_str())));
        self.pending = Some(PendingChallenge { phone, code });
        info!("OTP issued");
    }

    /// Check `code_input` against the pending challenge.
    ///
    /// A wrong code keeps the challenge so the user can try again.
    #[instrument(skip(self, code_input), fields(session = %self.session_id))]
    pub fn verify_otp(&mut self, code_input: &str) {
        let Some(pending) = self.pending.as_ref() else {
            self.notice = Some(Notice::error(messages::NO_OTP_SENT));
            return;
        };

        if !pending.code.matches(code_input) {
            warn!("OTP mismatch");
            self.notice = Some(Notice::error(messages::INVALID_OTP));
            return;
        }

        if let Some(pending) = self.pending.take() {
            info!(phone = %pending.phone, "Signed in");
            self.auth = Some(AuthSession {
                phone: pending.phone,
            });
        }
        self.notice = Some(Notice::success(messages::SIGNED_IN));
    }

    /// Sign out and empty the cart. Pending challenge and notice are kept.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub fn sign_out(&mut self) {
        let lines = self.cart.len();
        self.auth = None;
        self.cart.clear();
        info!(cleared_lines = lines, "Signed out");
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `product_id`. Requires a signed-in session.
    ///
    /// The id is not checked against the catalog and stock is not enforced.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub fn add_to_cart(&mut self, product_id: &ProductId) {
        if self.auth.is_none() {
            self.notice = Some(Notice::warning(messages::SIGN_IN_FIRST));
            return;
        }

        let quantity = self.cart.increment(product_id);
        debug!(quantity, "Cart line updated");
        self.notice = Some(Notice::success(messages::ADDED_TO_CART));
    }

    /// Remove the whole line for `product_id`. Absent ids are ignored.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        if let Some(quantity) = self.cart.remove(product_id) {
            debug!(quantity, "Cart line removed");
        }
    }

    // =========================================================================
    // Notices
    // =========================================================================

    /// Clear and return the current notice.
    pub const fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Footer "Help" link.
    pub fn show_help(&mut self) {
        self.notice = Some(Notice::info(messages::HELP_COMING_SOON));
    }

    /// Footer "Terms & Conditions" link.
    pub fn show_terms(&mut self) {
        self.notice = Some(Notice::info(messages::TERMS_COMING_SOON));
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub const fn auth(&self) -> Option<&AuthSession> {
        self.auth.as_ref()
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PendingChallenge> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.auth.is_some()
    }

    /// Which form the sign-in popup should show.
    #[must_use]
    pub const fn auth_step(&self) -> AuthStep {
        match (&self.auth, &self.pending) {
            (Some(_), _) => AuthStep::SignedIn,
            (None, Some(_)) => AuthStep::EnterCode,
            (None, None) => AuthStep::EnterPhone,
        }
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    /// Cart lines resolved against `catalog`, in insertion order.
    ///
    /// The reserved deal id resolves to the promotional record; any other id
    /// the catalog does not know is left out.
    #[must_use]
    pub fn cart_lines<'a>(&self, catalog: &'a Catalog) -> Vec<ResolvedLine<'a>> {
        self.cart.resolve(catalog)
    }

    /// Exact total of the resolved cart lines.
    #[must_use]
    pub fn cart_total(&self, catalog: &Catalog) -> Price {
        cart_total(&self.cart_lines(catalog))
    }

    /// Badge count: number of distinct cart lines, not units.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.cart.len()
    }

    /// Render-ready cart snapshot.
    #[must_use]
    pub fn cart_view(&self, catalog: &Catalog) -> CartView {
        let lines = self.cart_lines(catalog);
        CartView {
            items: lines.iter().map(CartItemView::from).collect(),
            total: cart_total(&lines).display(),
            item_count: self.item_count(),
        }
    }
}
