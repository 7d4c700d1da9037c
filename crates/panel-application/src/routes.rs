//! Canonical dashboard URLs, used for redirects and links.

pub fn app_list() -> String {
    "/apps/".to_string()
}

pub fn app_detail(app_name: &str) -> String {
    format!("/apps/{}/", app_name)
}

pub fn app_deploys(app_name: &str) -> String {
    format!("/apps/{}/deploys/", app_name)
}

pub fn app_teams(app_name: &str) -> String {
    format!("/apps/{}/teams/", app_name)
}

pub fn login() -> String {
    "/auth/login/".to_string()
}
