pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_AVATAR_URL: &str = "https://api.dicebear.com/8.x/initials/svg";

/// Users collection endpoint, overridable at build time with `USERS_API_URL`.
pub const USERS_URL: &str = match option_env!("USERS_API_URL") {
    Some(url) => url,
    None => DEFAULT_USERS_URL,
};

/// Avatar generation endpoint, overridable at build time with `AVATAR_API_URL`.
pub const AVATAR_URL: &str = match option_env!("AVATAR_API_URL") {
    Some(url) => url,
    None => DEFAULT_AVATAR_URL,
};
