//! Account tools
//!
//! Sign up and sign in are unauthenticated; sign in returns the token every
//! other tool expects. Checkout and sign out take that token.

pub mod checkout;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all account tools with the registry
pub fn register_user_tools(registry: &mut ToolRegistry) {
    registry.register(sign_up::SignUpTool::new());
    registry.register(sign_in::SignInTool::new());
    registry.register(checkout::CheckoutTool::new());
    registry.register(sign_out::SignOutTool::new());
}
