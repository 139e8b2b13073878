/// Default 256-color codes for every segment slot. Segment configurations
/// may override any of them per segment via `fg_color`/`bg_color`.
#[derive(Debug, Clone)]
pub struct Theme {
    pub path_fg: u8,
    pub path_bg: u8,
    pub home_fg: u8,
    pub home_bg: u8,
    pub git_clean_fg: u8,
    pub git_clean_bg: u8,
    pub git_dirty_fg: u8,
    pub git_dirty_bg: u8,
    pub git_stash_fg: u8,
    pub git_stash_bg: u8,
    pub cmd_passed_fg: u8,
    pub cmd_passed_bg: u8,
    pub cmd_failed_fg: u8,
    pub cmd_failed_bg: u8,
    pub time_fg: u8,
    pub time_bg: u8,
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "default" => default_theme(),
        "solarized-dark" => solarized_dark_theme(),
        "gruvbox" => gruvbox_theme(),
        _ => default_theme(), // fallback
    }
}

fn default_theme() -> Theme {
    Theme {
        path_fg: 250,
        path_bg: 237,
        home_fg: 15,
        home_bg: 31,
        git_clean_fg: 0,
        git_clean_bg: 148,
        git_dirty_fg: 15,
        git_dirty_bg: 161,
        git_stash_fg: 0,
        git_stash_bg: 221,
        cmd_passed_fg: 15,
        cmd_passed_bg: 236,
        cmd_failed_fg: 15,
        cmd_failed_bg: 161,
        time_fg: 250,
        time_bg: 238,
    }
}

fn solarized_dark_theme() -> Theme {
    Theme {
        path_fg: 250,
        path_bg: 10,
        home_fg: 15,
        home_bg: 33,
        git_clean_fg: 15,
        git_clean_bg: 2,
        git_dirty_fg: 15,
        git_dirty_bg: 1,
        git_stash_fg: 15,
        git_stash_bg: 3,
        cmd_passed_fg: 15,
        cmd_passed_bg: 0,
        cmd_failed_fg: 15,
        cmd_failed_bg: 1,
        time_fg: 250,
        time_bg: 0,
    }
}

fn gruvbox_theme() -> Theme {
    Theme {
        path_fg: 223,
        path_bg: 239,
        home_fg: 229,
        home_bg: 66,
        git_clean_fg: 235,
        git_clean_bg: 142,
        git_dirty_fg: 229,
        git_dirty_bg: 124,
        git_stash_fg: 235,
        git_stash_bg: 214,
        cmd_passed_fg: 229,
        cmd_passed_bg: 237,
        cmd_failed_fg: 229,
        cmd_failed_bg: 124,
        time_fg: 223,
        time_bg: 237,
    }
}
