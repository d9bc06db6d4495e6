//! Route history.

use crate::domain::Route;

/// Current route plus the routes visited before it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Go to `route`. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::info!("Navigate {} -> {}", self.current, route);
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.history.pop()?;
        tracing::info!("Navigate back {} -> {}", self.current, previous);
        self.current = previous;
        Some(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        // テスト項目: 遷移履歴を遡って戻れる
        // given (前提条件):
        let mut navigator = Navigator::new(Route::Home);

        // when (操作):
        navigator.navigate(Route::StudyRooms);
        navigator.navigate(Route::Login);

        // then (期待する結果):
        assert_eq!(navigator.current(), &Route::Login);
        assert_eq!(navigator.back(), Some(&Route::StudyRooms));
        assert_eq!(navigator.back(), Some(&Route::Home));
        assert_eq!(navigator.back(), None);
        assert_eq!(navigator.current(), &Route::Home);
    }

    #[test]
    fn test_navigate_to_current_route_keeps_history() {
        // テスト項目: 現在と同じルートへの遷移は履歴に積まれない
        // given (前提条件):
        let mut navigator = Navigator::new(Route::StudyRooms);

        // when (操作):
        navigator.navigate(Route::StudyRooms);

        // then (期待する結果):
        assert_eq!(navigator.back(), None);
    }
}
