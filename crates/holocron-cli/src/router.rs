//! Location handling for the browser.
//!
//! A location is a path such as `/films/2`. It is resolved against an ordered
//! route table; the first pattern that matches wins, so the detail pattern is
//! listed before the catch-all root.

use holocron_types::FilmId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Film { id: FilmId },
    Home,
}

type Params<'a> = Vec<(&'static str, &'a str)>;

struct RouteEntry {
    pattern: &'static str,
    build: fn(&Params<'_>) -> Option<Route>,
}

const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/films/:id",
        build: build_film,
    },
    RouteEntry {
        pattern: "/",
        build: build_home,
    },
];

fn build_film(params: &Params<'_>) -> Option<Route> {
    params
        .iter()
        .find(|(name, _)| *name == "id")
        .map(|(_, value)| Route::Film {
            id: FilmId::new(*value),
        })
}

fn build_home(_: &Params<'_>) -> Option<Route> {
    Some(Route::Home)
}

impl Route {
    /// Resolve a location against the route table.
    pub fn resolve(path: &str) -> Self {
        ROUTES
            .iter()
            .find_map(|entry| match_pattern(entry.pattern, path).and_then(|p| (entry.build)(&p)))
            .unwrap_or(Route::Home)
    }

    /// Canonical location for this route
    pub fn path(&self) -> String {
        match self {
            Route::Film { id } => format!("/films/{}", id),
            Route::Home => "/".to_string(),
        }
    }

    pub fn film_id(&self) -> Option<&FilmId> {
        match self {
            Route::Film { id } => Some(id),
            Route::Home => None,
        }
    }
}

/// Prefix match of `path` against `pattern`.
///
/// Literal segments compare case-insensitively, `:name` segments capture the
/// path segment verbatim. Extra trailing path segments are allowed; query
/// string and fragment are ignored.
fn match_pattern<'a>(pattern: &'static str, path: &'a str) -> Option<Params<'a>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());
    let mut params = Vec::new();

    for expected in pattern.split('/').filter(|s| !s.is_empty()) {
        let actual = path_segments.next()?;
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, actual)),
            None if expected.eq_ignore_ascii_case(actual) => {}
            None => return None,
        }
    }

    Some(params)
}

/// Navigation history of the browser session.
///
/// Works like the browser's history stack: pushing a location adds an entry,
/// going back drops the newest one. There is always a current entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize_location(initial)],
        }
    }

    /// Push a new location. Pushing the current location is a no-op.
    pub fn push(&mut self, location: &str) {
        let location = normalize_location(location);
        if location != self.location() {
            self.entries.push(location);
        }
    }

    /// Go back one entry. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn location(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    pub fn route(&self) -> Route {
        Route::resolve(self.location())
    }
}

fn normalize_location(location: &str) -> String {
    let trimmed = location.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(id: &str) -> Route {
        Route::Film {
            id: FilmId::new(id),
        }
    }

    #[test]
    fn test_resolve_root_and_unknown_paths_to_home() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/planets/1"), Route::Home);
        assert_eq!(Route::resolve("/films"), Route::Home);
        assert_eq!(Route::resolve("/films/"), Route::Home);
    }

    #[test]
    fn test_resolve_film_route() {
        assert_eq!(Route::resolve("/films/1"), film("1"));
        assert_eq!(Route::resolve("/films/1/"), film("1"));
        assert_eq!(Route::resolve("/FILMS/2"), film("2"));
    }

    #[test]
    fn test_film_route_is_a_prefix_match() {
        assert_eq!(Route::resolve("/films/3/characters"), film("3"));
        assert_eq!(Route::resolve("/films/3?ref=sidebar"), film("3"));
    }

    #[test]
    fn test_film_id_is_taken_verbatim() {
        assert_eq!(Route::resolve("/films/abc"), film("abc"));
        assert_eq!(Route::resolve("/films/-1"), film("-1"));
    }

    #[test]
    fn test_detail_pattern_wins_over_catch_all() {
        // "/" matches every path, so table order decides
        assert!(match_pattern("/", "/films/1").is_some());
        assert_eq!(Route::resolve("/films/1"), film("1"));
    }

    #[test]
    fn test_route_path_roundtrip() {
        assert_eq!(film("4").path(), "/films/4");
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::resolve(&film("4").path()), film("4"));
    }

    #[test]
    fn test_history_push_and_back() {
        let mut history = History::new("/");
        history.push("/films/1");
        history.push("/films/2");

        assert_eq!(history.location(), "/films/2");
        assert_eq!(history.route(), film("2"));
        assert!(history.can_go_back());

        assert!(history.back());
        assert_eq!(history.location(), "/films/1");
        assert!(history.back());
        assert_eq!(history.route(), Route::Home);
        assert!(!history.can_go_back());
        assert!(!history.back());
        assert_eq!(history.location(), "/");
    }

    #[test]
    fn test_history_push_same_location_is_noop() {
        let mut history = History::new("films/1");
        assert_eq!(history.location(), "/films/1");

        history.push("/films/1");
        assert!(!history.can_go_back());
    }
}
