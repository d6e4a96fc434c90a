//! Tab navigator
//!
//! Holds the fixed, ordered list of routes, tracks which one is active and
//! drives each route's mount lifecycle when the active tab changes.

use crate::error::NavError;
use crate::screens::{NavParams, Screen};
use crate::ui::style::Themed;
use ratatui::{layout::Rect, Frame};
use std::collections::HashSet;

/// A navigable destination bound to one screen
pub struct RouteDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: Box<dyn Screen>,
}

impl RouteDescriptor {
    pub fn new(
        name: &'static str,
        label: &'static str,
        icon: &'static str,
        screen: impl Screen + 'static,
    ) -> Self {
        Self {
            name,
            label,
            icon,
            screen: Box::new(screen),
        }
    }
}

impl std::fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Per-route mount state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounted,
}

/// What happens to a screen when its tab loses focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountPolicy {
    #[default]
    UnmountInactive,
    KeepWarm,
}

impl MountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MountPolicy::UnmountInactive => "Unmounted when hidden",
            MountPolicy::KeepWarm => "Kept warm",
        }
    }
}

/// Tab bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

pub struct TabNavigator {
    routes: Vec<RouteDescriptor>,
    lifecycle: Vec<Lifecycle>,
    active: usize,
    policy: MountPolicy,
    render_pending: bool,
}

impl TabNavigator {
    /// Build a navigator and mount its initial route
    ///
    /// The initial route is `initial` when given, otherwise the first
    /// declared route.
    pub fn new(
        routes: Vec<RouteDescriptor>,
        initial: Option<&str>,
        policy: MountPolicy,
    ) -> Result<Self, NavError> {
        if routes.is_empty() {
            return Err(NavError::NoRoutes);
        }

        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.name) {
                return Err(NavError::DuplicateRoute(route.name.to_string()));
            }
        }

        let active = match initial {
            Some(name) => routes
                .iter()
                .position(|r| r.name == name)
                .ok_or_else(|| NavError::UnknownInitialRoute(name.to_string()))?,
            None => 0,
        };

        let mut navigator = Self {
            lifecycle: vec![Lifecycle::Unmounted; routes.len()],
            routes,
            active,
            policy,
            render_pending: true,
        };
        navigator.mount(active);
        navigator.routes[active].screen.on_focus(&NavParams::default());

        Ok(navigator)
    }

    pub fn active_route(&self) -> &'static str {
        self.routes[self.active].name
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    #[cfg(test)]
    pub fn route_names(&self) -> Vec<&'static str> {
        self.routes.iter().map(|r| r.name).collect()
    }

    pub fn name_at(&self, idx: usize) -> Option<&'static str> {
        self.routes.get(idx).map(|r| r.name)
    }

    #[cfg(test)]
    pub fn lifecycle(&self, name: &str) -> Option<Lifecycle> {
        self.index_of(name).map(|idx| self.lifecycle[idx])
    }

    /// Tab bar entries in declaration order
    pub fn tabs(&self) -> Vec<TabInfo> {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| TabInfo {
                name: r.name,
                label: r.label,
                icon: r.icon,
                active: i == self.active,
            })
            .collect()
    }

    /// Handle a tab press
    pub fn press(&mut self, name: &str) -> Result<(), NavError> {
        self.navigate(name, NavParams::default())
    }

    /// Activate a route, handing it navigation parameters
    ///
    /// Unknown routes leave the navigator untouched.
    pub fn navigate(&mut self, name: &str, params: NavParams) -> Result<(), NavError> {
        let target = self
            .index_of(name)
            .ok_or_else(|| NavError::UnknownRoute(name.to_string()))?;
        self.activate(target, params);
        Ok(())
    }

    pub fn select_next(&mut self) {
        let target = (self.active + 1) % self.routes.len();
        self.activate(target, NavParams::default());
    }

    pub fn select_prev(&mut self) {
        let target = (self.active + self.routes.len() - 1) % self.routes.len();
        self.activate(target, NavParams::default());
    }

    pub fn active_screen_mut(&mut self) -> &mut dyn Screen {
        self.routes[self.active].screen.as_mut()
    }

    pub fn active_screen(&self) -> &dyn Screen {
        self.routes[self.active].screen.as_ref()
    }

    pub fn needs_render(&self) -> bool {
        self.render_pending
    }

    pub fn request_render(&mut self) {
        self.render_pending = true;
    }

    /// Render the active screen; inactive screens are never touched
    pub fn render_active(&mut self, frame: &mut Frame, area: Rect, themed: &Themed) {
        self.routes[self.active].screen.render(frame, area, themed);
        self.render_pending = false;
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.name == name)
    }

    fn activate(&mut self, target: usize, params: NavParams) {
        let previous = self.active;
        if target != previous {
            log::debug!(
                "tab {} -> {}",
                self.routes[previous].name,
                self.routes[target].name
            );
            if self.policy == MountPolicy::UnmountInactive {
                self.unmount(previous);
            }
            self.active = target;
        }

        self.mount(target);
        self.routes[target].screen.on_focus(&params);
        self.render_pending = true;
    }

    fn mount(&mut self, idx: usize) {
        if self.lifecycle[idx] == Lifecycle::Unmounted {
            log::debug!("mount {}", self.routes[idx].name);
            self.lifecycle[idx] = Lifecycle::Mounted;
            self.routes[idx].screen.on_mount();
        }
    }

    fn unmount(&mut self, idx: usize) {
        if self.lifecycle[idx] == Lifecycle::Mounted {
            log::debug!("unmount {}", self.routes[idx].name);
            self.lifecycle[idx] = Lifecycle::Unmounted;
            self.routes[idx].screen.on_unmount();
        }
    }
}
