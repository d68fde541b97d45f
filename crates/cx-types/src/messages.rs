//! User-facing strings shared by the login form, the modal and the API.

pub const RB_USER_ID_REQUIRED: &str = "RB User ID is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const EMAIL_UNREGISTERED: &str = "This email is not registered. Please sign up first.";
pub const NETWORK_ERROR: &str = "Network error, please try again later";
pub const LOGIN_SUCCESS: &str = "Login successful";
pub const INVALID_FORM: &str = "Please correct the highlighted fields";
