//! Launcher controller.
//!
//! Owns the filter state and turns input events (query text, navigation
//! keys, show) into renders, hides and launch requests. Everything here is
//! synchronous: a transition has rendered before it returns.

use crate::catalog::AppIndex;
use crate::config::{LauncherConfig, MAX_RESULTS_LIMIT};
use crate::desktop_entry::DesktopApp;
use crate::filter::{EmptyState, filter};
use crate::launch::LaunchRequest;
use crate::selection::Selection;
use log::info;
use std::sync::Arc;

/// Description shown for apps without a Comment.
pub const DEFAULT_DESCRIPTION: &str = "Application";

/// Current query, visible matches and highlighted row.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    query: String,
    matches: Vec<Arc<DesktopApp>>,
    selection: Selection,
}

impl FilterState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[Arc<DesktopApp>] {
        &self.matches
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selected(&self) -> Option<&Arc<DesktopApp>> {
        self.selected_index().and_then(|i| self.matches.get(i))
    }

    /// Set when there are no rows; tells the two empty cases apart.
    pub fn empty_state(&self) -> Option<EmptyState> {
        EmptyState::classify(&self.query, &self.matches)
    }

    /// Row contents in display order.
    pub fn rows(&self) -> impl Iterator<Item = RowContent<'_>> {
        let selected = self.selected_index();
        self.matches
            .iter()
            .enumerate()
            .map(move |(i, app)| RowContent::new(app, selected == Some(i)))
    }
}

/// What a row needs to draw one app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowContent<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub icon: &'a str,
    pub selected: bool,
}

impl<'a> RowContent<'a> {
    fn new(app: &'a DesktopApp, selected: bool) -> Self {
        let description = if app.description.is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            app.description.as_str()
        };

        Self {
            name: &app.name,
            description,
            icon: &app.icon,
            selected,
        }
    }
}

/// A toolkit row widget.
pub trait Row {
    fn attach(&mut self, content: &RowContent<'_>);
    fn set_selected(&mut self, selected: bool);
}

/// Push `state` into `rows`. Extra widgets are left alone.
/// Returns how many rows were filled.
pub fn render_rows<R: Row>(state: &FilterState, rows: &mut [R]) -> usize {
    let mut filled = 0;
    for (row, content) in rows.iter_mut().zip(state.rows()) {
        row.attach(&content);
        row.set_selected(content.selected);
        filled += 1;
    }
    filled
}

/// Presentation collaborator: draws the list and owns window visibility.
pub trait LauncherSurface {
    fn render(&mut self, state: &FilterState);
    fn hide(&mut self);
}

/// Process collaborator. Must not block; failures are its own to report.
pub trait CommandSpawner {
    fn spawn(&mut self, request: &LaunchRequest);
}

/// The launcher state machine.
pub struct Launcher<S: LauncherSurface, P: CommandSpawner> {
    index: AppIndex,
    state: FilterState,
    max_results: usize,
    terminal: String,
    surface: S,
    spawner: P,
}

impl<S: LauncherSurface, P: CommandSpawner> Launcher<S, P> {
    /// Starts with no selection and an empty list until the first `show`.
    pub fn new(index: AppIndex, config: &LauncherConfig, surface: S, spawner: P) -> Self {
        Self {
            index,
            state: FilterState::default(),
            max_results: config.max_results.clamp(1, MAX_RESULTS_LIMIT),
            terminal: config.terminal.clone(),
            surface,
            spawner,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn index(&self) -> &AppIndex {
        &self.index
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Window became visible: clear the query and list everything.
    pub fn show(&mut self) {
        self.set_query("");
    }

    /// Query text changed.
    pub fn set_query(&mut self, query: &str) {
        self.state.query = query.to_string();
        self.rebuild();
    }

    pub fn move_down(&mut self) {
        let next = self.state.selection.move_down(self.state.matches.len());
        self.select(next);
    }

    pub fn move_up(&mut self) {
        let next = self.state.selection.move_up();
        self.select(next);
    }

    /// Launch the highlighted app. The surface is hidden before the
    /// command is handed off. Returns the request that was spawned.
    pub fn confirm(&mut self) -> Option<LaunchRequest> {
        let app = self.state.selected()?;
        let request = LaunchRequest::new(app, &self.terminal);

        info!("Launching {} ({})", app.name, request.command);
        self.surface.hide();
        self.spawner.spawn(&request);

        Some(request)
    }

    /// Hide without touching the selection.
    pub fn dismiss(&mut self) {
        self.surface.hide();
    }

    /// Swap in a rebuilt index and re-run the current query.
    pub fn replace_index(&mut self, index: AppIndex) {
        self.index = index;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.state.matches = filter(&self.index, &self.state.query, self.max_results);
        self.state.selection = Selection::list_rebuilt(self.state.matches.len());
        self.surface.render(&self.state);
    }

    fn select(&mut self, next: Selection) {
        if next != self.state.selection {
            self.state.selection = next;
            self.surface.render(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop_entry::FALLBACK_ICON;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceCall {
        Render {
            names: Vec<String>,
            selected: Option<usize>,
        },
        Hide,
        Spawn(String),
    }

    /// Records surface and spawner calls in one timeline.
    #[derive(Default, Clone)]
    struct Recorder {
        calls: std::rc::Rc<std::cell::RefCell<Vec<SurfaceCall>>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<SurfaceCall> {
            self.calls.borrow().clone()
        }

        fn clear(&self) {
            self.calls.borrow_mut().clear();
        }
    }

    impl LauncherSurface for Recorder {
        fn render(&mut self, state: &FilterState) {
            self.calls.borrow_mut().push(SurfaceCall::Render {
                names: state.matches().iter().map(|a| a.name.clone()).collect(),
                selected: state.selected_index(),
            });
        }

        fn hide(&mut self) {
            self.calls.borrow_mut().push(SurfaceCall::Hide);
        }
    }

    impl CommandSpawner for Recorder {
        fn spawn(&mut self, request: &LaunchRequest) {
            self.calls
                .borrow_mut()
                .push(SurfaceCall::Spawn(request.command.clone()));
        }
    }

    fn app(name: &str, exec: &str, terminal: bool) -> DesktopApp {
        DesktopApp {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            icon: FALLBACK_ICON.to_string(),
            exec: exec.to_string(),
            terminal,
            source_path: PathBuf::from("/usr/share/applications/x.desktop"),
        }
    }

    fn launcher(apps: Vec<DesktopApp>) -> (Launcher<Recorder, Recorder>, Recorder) {
        let recorder = Recorder::default();
        let launcher = Launcher::new(
            AppIndex::from_apps(apps),
            &LauncherConfig::default(),
            recorder.clone(),
            recorder.clone(),
        );
        (launcher, recorder)
    }

    #[test]
    fn test_initial_state_is_empty_until_show() {
        let (launcher, recorder) = launcher(vec![app("Foo", "foo", false)]);
        assert_eq!(launcher.state().selection(), Selection::None);
        assert!(launcher.state().matches().is_empty());
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_show_lists_everything_and_selects_first() {
        let (mut launcher, recorder) =
            launcher(vec![app("Foo", "foo", false), app("Bar", "bar", false)]);
        launcher.show();

        assert_eq!(launcher.state().selected_index(), Some(0));
        assert_eq!(
            recorder.calls(),
            vec![SurfaceCall::Render {
                names: vec!["Bar".into(), "Foo".into()],
                selected: Some(0),
            }]
        );
    }

    #[test]
    fn test_query_scenario() {
        let (mut launcher, _) = launcher(vec![app("Foo", "foo", false), app("Bar", "bar", false)]);
        launcher.show();
        launcher.set_query("fo");

        let names: Vec<_> = launcher.state().matches().iter().map(|a| &a.name).collect();
        assert_eq!(names, vec!["Foo"]);
        assert_eq!(launcher.state().selected_index(), Some(0));
    }

    #[test]
    fn test_move_down_with_single_match_is_noop() {
        let (mut launcher, recorder) = launcher(vec![app("Foo", "foo", false)]);
        launcher.show();
        recorder.clear();

        launcher.move_down();
        assert_eq!(launcher.state().selected_index(), Some(0));
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_navigation_then_query_resets_selection() {
        let (mut launcher, _) = launcher(vec![
            app("Alpha", "a", false),
            app("Beta", "b", false),
            app("Gamma", "g", false),
        ]);
        launcher.show();
        launcher.move_down();
        launcher.move_down();
        launcher.move_down();
        assert_eq!(launcher.state().selected_index(), Some(2));
        launcher.move_up();
        assert_eq!(launcher.state().selected_index(), Some(1));

        launcher.set_query("a");
        assert_eq!(launcher.state().selected_index(), Some(0));
    }

    #[test]
    fn test_empty_results_have_no_selection() {
        let (mut launcher, recorder) = launcher(vec![app("Foo", "foo", false)]);
        launcher.show();
        launcher.set_query("zzz");

        assert_eq!(launcher.state().selection(), Selection::None);
        assert_eq!(launcher.state().empty_state(), Some(EmptyState::NoMatches));

        recorder.clear();
        launcher.move_down();
        launcher.move_up();
        assert_eq!(launcher.confirm(), None);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_empty_index_reports_no_applications() {
        let (mut launcher, _) = launcher(Vec::new());
        launcher.show();
        assert_eq!(
            launcher.state().empty_state(),
            Some(EmptyState::NoApplications)
        );
    }

    #[test]
    fn test_confirm_hides_before_spawning() {
        let (mut launcher, recorder) = launcher(vec![
            app("Btop", "btop", true),
            app("Firefox", "firefox", false),
        ]);
        launcher.show();
        launcher.move_down();
        recorder.clear();

        let request = launcher.confirm().unwrap();
        assert_eq!(request.app_id, "firefox");
        assert_eq!(
            recorder.calls(),
            vec![
                SurfaceCall::Hide,
                SurfaceCall::Spawn("sh -c 'firefox'".into())
            ]
        );
    }

    #[test]
    fn test_confirm_terminal_app_uses_configured_terminal() {
        let recorder = Recorder::default();
        let config = LauncherConfig {
            terminal: "foot".to_string(),
            ..LauncherConfig::default()
        };
        let mut launcher = Launcher::new(
            AppIndex::from_apps(vec![app("Btop", "btop", true)]),
            &config,
            recorder.clone(),
            recorder.clone(),
        );
        launcher.show();

        let request = launcher.confirm().unwrap();
        assert_eq!(request.command, "foot -e sh -c 'btop; exec $SHELL'");
    }

    #[test]
    fn test_dismiss_keeps_selection_and_show_resets() {
        let (mut launcher, recorder) =
            launcher(vec![app("Alpha", "a", false), app("Beta", "b", false)]);
        launcher.show();
        launcher.set_query("a");
        launcher.move_down();
        recorder.clear();

        launcher.dismiss();
        assert_eq!(recorder.calls(), vec![SurfaceCall::Hide]);
        assert_eq!(launcher.state().selected_index(), Some(1));
        assert_eq!(launcher.state().query(), "a");

        launcher.show();
        assert_eq!(launcher.state().query(), "");
        assert_eq!(launcher.state().selected_index(), Some(0));
    }

    #[test]
    fn test_results_capped_by_max_results() {
        let apps = (0..12).map(|i| app(&format!("App {i:02}"), "x", false)).collect();
        let (mut launcher, _) = launcher(apps);
        launcher.show();
        assert_eq!(launcher.state().matches().len(), 8);

        for _ in 0..20 {
            launcher.move_down();
        }
        assert_eq!(launcher.state().selected_index(), Some(7));
    }

    #[test]
    fn test_oversized_max_results_is_clamped() {
        let recorder = Recorder::default();
        let config = LauncherConfig {
            max_results: usize::MAX,
            ..LauncherConfig::default()
        };
        let apps = (0..100).map(|i| app(&format!("App {i:03}"), "x", false)).collect();
        let mut launcher = Launcher::new(
            AppIndex::from_apps(apps),
            &config,
            recorder.clone(),
            recorder.clone(),
        );
        launcher.show();
        assert_eq!(launcher.state().matches().len(), MAX_RESULTS_LIMIT);
    }

    #[test]
    fn test_replace_index_reruns_query() {
        let (mut launcher, _) = launcher(vec![app("Foo", "foo", false)]);
        launcher.show();
        launcher.set_query("ba");
        assert!(launcher.state().matches().is_empty());

        launcher.replace_index(AppIndex::from_apps(vec![
            app("Foo", "foo", false),
            app("Bar", "bar", false),
        ]));
        assert_eq!(launcher.state().matches().len(), 1);
        assert_eq!(launcher.state().selected_index(), Some(0));
    }

    #[derive(Default)]
    struct TestRow {
        name: String,
        description: String,
        selected: bool,
    }

    impl Row for TestRow {
        fn attach(&mut self, content: &RowContent<'_>) {
            self.name = content.name.to_string();
            self.description = content.description.to_string();
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }
    }

    #[test]
    fn test_render_rows_fills_and_highlights() {
        let mut with_comment = app("Files", "files", false);
        with_comment.description = "Browse files".to_string();
        let (mut launcher, _) = launcher(vec![with_comment, app("Foo", "foo", false)]);
        launcher.show();
        launcher.move_down();

        let mut rows: Vec<TestRow> = (0..3).map(|_| TestRow::default()).collect();
        assert_eq!(render_rows(launcher.state(), &mut rows), 2);

        assert_eq!(rows[0].name, "Files");
        assert_eq!(rows[0].description, "Browse files");
        assert!(!rows[0].selected);
        assert_eq!(rows[1].description, DEFAULT_DESCRIPTION);
        assert!(rows[1].selected);
        assert!(rows[2].name.is_empty());
    }
}
