/// Host id used until a real peer is configured
pub const DEFAULT_HOST_ID: i64 = -1;
/// Table holding portfolio records
pub const DEFAULT_PORTFOLIO_TABLE: &str = "mahara_portfolio";
/// Table holding user records (`id`, `username`)
pub const USER_TABLE: &str = "user";
/// Prefix prepended to every event name
pub const DEFAULT_EVENT_PREFIX: &str = "mahara";
/// Path of the single sign-on jump page on the local site
pub const JUMP_PATH: &str = "/auth/mnet/jump.php";

pub const DEFAULT_GET_VIEWS_METHOD: &str = "mod/mahara/rpclib.php/get_views_for_user";
pub const DEFAULT_SUBMIT_VIEW_METHOD: &str = "mod/mahara/rpclib.php/submit_view_for_assessment";
pub const DEFAULT_RELEASE_VIEW_METHOD: &str = "mod/mahara/rpclib.php/release_submitted_view";
