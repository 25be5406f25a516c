use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Object, Reflect};
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, MouseEvent, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::config;
use crate::nav::keyboard::{self, Direction};
use crate::nav::registry::PageRegistry;
use crate::nav::scroll::ScrollTargets;
use crate::nav::throttle::{PerformanceClock, Throttle};
use crate::nav::transition::{Phase, Schedule, Transition};

/// Looks an element up and warns instead of crashing when it is missing.
pub fn query_helper(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(Some(element)) => Some(element),
        Ok(None) => {
            log::warn!("element not found: {selector}");
            None
        }
        Err(err) => {
            log::warn!("invalid selector {selector}: {err:?}");
            None
        }
    }
}

fn collect(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    out.push(element);
                }
            }
        }
    }
    out
}

fn scroll_metrics(window: &Window, document: &Document) -> (f64, f64, f64) {
    let scroll_top = window.page_y_offset().unwrap_or(0.0);
    let document_height = document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    (scroll_top, document_height, viewport_height)
}

/// The hamburger chrome: the link container that carries the open state and
/// the three bar spans that fold into an "X".
#[derive(Clone)]
struct MenuHandles {
    container: Element,
    bars: Vec<HtmlElement>,
}

impl MenuHandles {
    fn is_open(&self) -> bool {
        self.container.class_list().contains("active")
    }

    fn open(&self) {
        let _ = self.container.class_list().add_1("active");
        if let [top, middle, bottom] = &self.bars[..] {
            let _ = top
                .style()
                .set_property("transform", "rotate(45deg) translate(5px, 5px)");
            let _ = middle.style().set_property("opacity", "0");
            let _ = bottom
                .style()
                .set_property("transform", "rotate(-45deg) translate(7px, -6px)");
        }
    }

    /// Idempotent: closing an already-closed menu resets the bars again.
    fn close(&self) {
        let _ = self.container.class_list().remove_1("active");
        if let [top, middle, bottom] = &self.bars[..] {
            let _ = top
                .style()
                .set_property("transform", "rotate(0) translate(0, 0)");
            let _ = middle.style().set_property("opacity", "1");
            let _ = bottom
                .style()
                .set_property("transform", "rotate(0) translate(0, 0)");
        }
    }

    fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

/// Navigation & effects controller.
///
/// Bound once to the rendered chrome; every element handle and flag lives
/// here rather than in module-level globals.
pub struct Controller {
    window: Window,
    document: Document,
    menu: MenuHandles,
    scroll: ScrollTargets,
    /// Every `.page` section, including any the registry rejected; the exit
    /// sweep has to clear active markers wherever they are.
    sections: Vec<Element>,
    registry: PageRegistry<Element>,
    schedule: Schedule,
    transition: RefCell<Option<Transition>>,
}

impl Controller {
    /// Discovers the chrome and builds the page registry. Returns `None`
    /// when the navbar chrome itself is missing; registry defects are only
    /// warnings and the valid subset keeps working.
    pub fn attach(window: &Window, document: &Document) -> Option<Rc<Self>> {
        let navbar = query_helper(document, "#navbar")?;
        let logo = query_helper(document, "#logo")?;
        let links_container = query_helper(document, "#navLinks")?;
        let menu_button = query_helper(document, "#mobileMenu")?;
        let indicator = query_helper(document, "#scrollIndicator")?
            .dyn_into::<HtmlElement>()
            .ok()?;

        let links = collect(document, ".nav-link");
        let sections = collect(document, ".page");

        let mut link_pairs = Vec::new();
        for link in &links {
            match link.get_attribute("data-page") {
                Some(id) => link_pairs.push((id, link.clone())),
                None => log::warn!("nav link without a data-page attribute"),
            }
        }
        let section_pairs = sections
            .iter()
            .map(|section| (section.id(), section.clone()))
            .collect();

        let (registry, errors) = PageRegistry::build(link_pairs, section_pairs);
        for error in &errors {
            log::warn!("page registry: {error}");
        }
        if registry.is_empty() {
            log::warn!("no complete views found, navigation will be inert");
        }

        let mut bars = Vec::new();
        if let Ok(spans) = menu_button.query_selector_all("span") {
            for index in 0..spans.length() {
                if let Some(bar) = spans.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                {
                    bars.push(bar);
                }
            }
        }

        Some(Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            menu: MenuHandles {
                container: links_container,
                bars,
            },
            scroll: ScrollTargets {
                navbar,
                logo,
                links,
                indicator,
            },
            sections,
            registry,
            schedule: Schedule::standard(),
            transition: RefCell::new(None),
        }))
    }

    /// Reconciles navbar mode and the progress indicator with the current
    /// scroll position.
    pub fn handle_scroll(&self) {
        let (scroll_top, document_height, viewport_height) =
            scroll_metrics(&self.window, &self.document);
        self.scroll
            .apply(scroll_top, document_height, viewport_height);
    }

    /// Choreographed transition to `target_id`.
    ///
    /// Stages are scheduled up front and owned by a single `Transition`;
    /// starting a new switch drops the previous one, cancelling whatever of
    /// it had not fired yet.
    pub fn switch_to_page(self: &Rc<Self>, target_id: &str) {
        if !matches!(self.transition_phase(), Phase::Idle | Phase::Settled) {
            if let Some(previous) = self.transition.borrow().as_ref() {
                log::info!("superseding in-flight switch to '{}'", previous.target());
            }
        }
        // Dropping the previous transition cancels its pending stages.
        self.transition.borrow_mut().take();

        let mut transition = Transition::new(target_id);
        let schedule = self.schedule;

        // Press every link down and drop its active marker.
        for link in &self.scroll.links {
            let _ = link.class_list().remove_1("active");
            if let Some(html) = link.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("transform", "scale(0.95)");
            }
        }
        let pressed = self.scroll.links.clone();
        transition.stage(schedule.press_reset_ms, move || {
            for link in &pressed {
                if let Some(html) = link.dyn_ref::<HtmlElement>() {
                    let _ = html.style().remove_property("transform");
                }
            }
        });

        // Start the exit animation on whatever is currently active.
        let exiting: Vec<Element> = self
            .sections
            .iter()
            .filter(|section| section.class_list().contains("active"))
            .cloned()
            .collect();
        for section in &exiting {
            if let Some(html) = section.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("opacity", "0");
                let _ = html.style().set_property("transform", "translateY(20px)");
            }
        }

        let entry = self.registry.get(target_id).cloned();
        if entry.is_none() {
            log::warn!("no page registered for '{target_id}', only clearing the active one");
        }

        // Exit completes: swap active markers, scroll up, close the menu.
        {
            let phase = transition.phase_cell();
            let entry = entry.clone();
            let window = self.window.clone();
            let menu = self.menu.clone();
            transition.stage(schedule.exit_ms, move || {
                phase.set(Phase::EnteringNew);
                for section in &exiting {
                    let _ = section.class_list().remove_1("active");
                }
                if let Some(entry) = &entry {
                    let _ = entry.link.class_list().add_1("active");
                    if let Some(link) = entry.link.dyn_ref::<HtmlElement>() {
                        let _ = link.style().set_property("transform", "scale(1.05)");
                    }
                    let _ = entry.section.class_list().add_1("active");
                    if let Some(section) = entry.section.dyn_ref::<HtmlElement>() {
                        let _ = section.style().set_property("opacity", "0");
                        let _ = section.style().set_property("transform", "translateY(20px)");
                    }
                }
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
                menu.close();
            });
        }

        if let Some(entry) = &entry {
            let section = entry.section.clone();
            transition.stage(schedule.enter_ms, move || {
                if let Some(html) = section.dyn_ref::<HtmlElement>() {
                    let _ = html.style().set_property("opacity", "1");
                    let _ = html.style().set_property("transform", "translateY(0)");
                }
            });

            let link = entry.link.clone();
            transition.stage(schedule.pulse_reset_ms, move || {
                if let Some(html) = link.dyn_ref::<HtmlElement>() {
                    let _ = html.style().remove_property("transform");
                }
            });
        }

        // Navbar mode matches offset 0 once the smooth scroll has started.
        {
            let phase = transition.phase_cell();
            let targets = self.scroll.clone();
            let window = self.window.clone();
            let document = self.document.clone();
            transition.stage(schedule.reconcile_ms, move || {
                let (scroll_top, document_height, viewport_height) =
                    scroll_metrics(&window, &document);
                targets.apply(scroll_top, document_height, viewport_height);
                phase.set(Phase::Settled);
            });
        }

        *self.transition.borrow_mut() = Some(transition);
    }

    pub fn transition_phase(&self) -> Phase {
        self.transition
            .borrow()
            .as_ref()
            .map(Transition::phase)
            .unwrap_or(Phase::Idle)
    }

    pub fn toggle_menu(&self) {
        self.menu.toggle();
    }

    pub fn close_menu(&self) {
        self.menu.close();
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Index of the currently active nav link in DOM order.
    fn active_page_index(&self) -> Option<usize> {
        self.registry
            .entries()
            .position(|(_, entry)| entry.link.class_list().contains("active"))
    }

    /// Alt+Arrow moves between adjacent views; Escape closes the menu.
    /// Anything else passes through untouched.
    pub fn handle_keydown(self: &Rc<Self>, event: &KeyboardEvent) {
        if event.alt_key() {
            if let Some(direction) = Direction::from_key(&event.key()) {
                let next = keyboard::adjacent_index(
                    self.active_page_index(),
                    direction,
                    self.registry.len(),
                );
                if let Some(id) = next.and_then(|index| self.registry.id_at(index)) {
                    event.prevent_default();
                    let id = id.to_string();
                    self.switch_to_page(&id);
                }
                return;
            }
        }

        if event.key() == "Escape" {
            self.close_menu();
        }
    }

    /// Smooth-scrolls an arbitrary element into view, for inline callers.
    pub fn smooth_scroll_to_element(&self, target_id: &str) {
        let Some(target) = self.document.get_element_by_id(target_id) else {
            log::warn!("element not found: #{target_id}");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Desktop widths never show the hamburger, so crossing the breakpoint
    /// force-closes it; the indicator is recomputed for the new geometry.
    pub fn on_resize(&self) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0);
        if width > config::MOBILE_BREAKPOINT_PX && self.menu_is_open() {
            self.close_menu();
        }
        self.handle_scroll();
    }

    /// Registers the window/document listeners the controller drives.
    pub fn wire(self: &Rc<Self>) {
        // Scroll, leading-edge throttled to roughly a frame.
        {
            let controller = Rc::clone(self);
            let throttle = Throttle::new(config::SCROLL_THROTTLE_MS, PerformanceClock);
            let callback = Closure::wrap(Box::new(move || {
                if throttle.try_fire() {
                    controller.handle_scroll();
                }
            }) as Box<dyn FnMut()>);
            let _ = self
                .window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            callback.forget();
        }

        // Clicks outside the navbar close the menu no matter its state.
        {
            let controller = Rc::clone(self);
            let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                if !controller.scroll.navbar.contains(target.as_ref()) {
                    controller.menu.close();
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ = self
                .document
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            callback.forget();
        }

        {
            let controller = Rc::clone(self);
            let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                controller.handle_keydown(&event);
            }) as Box<dyn FnMut(KeyboardEvent)>);
            let _ = self
                .document
                .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
            callback.forget();
        }
    }
}

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<Controller>>> = RefCell::new(None);
}

/// Makes the controller reachable from view callbacks.
pub fn install(controller: Rc<Controller>) {
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
}

pub fn with<F>(f: F)
where
    F: FnOnce(&Rc<Controller>),
{
    CONTROLLER.with(|slot| {
        if let Some(controller) = slot.borrow().as_ref() {
            f(controller);
        }
    });
}

/// Binds the controller to the rendered DOM, wires its listeners, publishes
/// the window API and reconciles the initial scroll state. Runs once, after
/// the first render has committed.
pub fn init(window: &Window, document: &Document) {
    match Controller::attach(window, document) {
        Some(controller) => {
            controller.wire();
            export_navigation_api(&controller);
            // A reload can restore a deep scroll offset; reconcile right away.
            controller.handle_scroll();
            log::info!(
                "navigation controller ready: {:?}",
                controller.registry.ids().collect::<Vec<_>>()
            );
            install(controller);
        }
        None => log::warn!("navigation chrome missing, controller not installed"),
    }
}

/// Publishes `window.NavigationController` with the page-switch function,
/// the scroll handler and the smooth-scroll helper for inline callers.
fn export_navigation_api(controller: &Rc<Controller>) {
    let api = Object::new();

    let c = Rc::clone(controller);
    let switch = Closure::wrap(Box::new(move |id: JsValue| {
        if let Some(id) = id.as_string() {
            c.switch_to_page(&id);
        }
    }) as Box<dyn FnMut(JsValue)>);
    let _ = Reflect::set(&api, &JsValue::from_str("switchToPage"), switch.as_ref());
    switch.forget();

    let c = Rc::clone(controller);
    let scroll = Closure::wrap(Box::new(move || c.handle_scroll()) as Box<dyn FnMut()>);
    let _ = Reflect::set(&api, &JsValue::from_str("handleScroll"), scroll.as_ref());
    scroll.forget();

    let c = Rc::clone(controller);
    let smooth = Closure::wrap(Box::new(move |id: JsValue| {
        if let Some(id) = id.as_string() {
            c.smooth_scroll_to_element(&id);
        }
    }) as Box<dyn FnMut(JsValue)>);
    let _ = Reflect::set(
        &api,
        &JsValue::from_str("smoothScrollToElement"),
        smooth.as_ref(),
    );
    smooth.forget();

    let _ = Reflect::set(
        &controller.window,
        &JsValue::from_str("NavigationController"),
        &api,
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::KeyboardEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r##"
        <nav id="navbar">
            <a id="logo" href="#">Nimbus</a>
            <button id="mobileMenu"><span></span><span></span><span></span></button>
            <ul id="navLinks">
                <li><a class="nav-link active" data-page="home" href="#">Home</a></li>
                <li><a class="nav-link" data-page="features" href="#">Features</a></li>
                <li><a class="nav-link" data-page="about" href="#">About</a></li>
            </ul>
            <div id="scrollIndicator"></div>
        </nav>
        <main>
            <section id="home" class="page active"></section>
            <section id="features" class="page"></section>
            <section id="about" class="page"></section>
        </main>
    "##;

    fn fixture_controller() -> Rc<Controller> {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        document.body().unwrap().set_inner_html(FIXTURE);
        Controller::attach(&window, &document).unwrap()
    }

    fn ids_of(document: &Document, selector: &str) -> Vec<String> {
        collect(document, selector)
            .into_iter()
            .map(|element| {
                element
                    .get_attribute("data-page")
                    .unwrap_or_else(|| element.id())
            })
            .collect()
    }

    #[wasm_bindgen_test]
    async fn switch_settles_on_exactly_one_active_page_and_link() {
        let controller = fixture_controller();
        controller.switch_to_page("about");
        TimeoutFuture::new(600).await;

        assert_eq!(
            ids_of(&controller.document, ".page.active"),
            vec!["about".to_string()]
        );
        assert_eq!(
            ids_of(&controller.document, ".nav-link.active"),
            vec!["about".to_string()]
        );
        assert_eq!(controller.transition_phase(), Phase::Settled);
    }

    #[wasm_bindgen_test]
    async fn unknown_target_leaves_nothing_active() {
        let controller = fixture_controller();
        controller.switch_to_page("ghost");
        TimeoutFuture::new(600).await;

        assert!(ids_of(&controller.document, ".page.active").is_empty());
        assert!(ids_of(&controller.document, ".nav-link.active").is_empty());
    }

    #[wasm_bindgen_test]
    async fn a_second_switch_supersedes_the_first() {
        let controller = fixture_controller();
        controller.switch_to_page("features");
        TimeoutFuture::new(50).await;
        controller.switch_to_page("about");
        TimeoutFuture::new(600).await;

        assert_eq!(
            ids_of(&controller.document, ".page.active"),
            vec!["about".to_string()]
        );
    }

    #[wasm_bindgen_test]
    fn scroll_state_matches_the_offset_idempotently() {
        let controller = fixture_controller();

        // 100px down a page with 1000px of scrollable height.
        controller.scroll.apply(100.0, 1800.0, 800.0);
        controller.scroll.apply(100.0, 1800.0, 800.0);
        assert!(controller.scroll.navbar.class_list().contains("scrolled"));
        assert!(controller.scroll.logo.class_list().contains("force-dark"));
        assert_eq!(
            controller.scroll.indicator.style().get_property_value("width"),
            Ok("10%".to_string())
        );

        controller.scroll.apply(0.0, 1800.0, 800.0);
        assert!(!controller.scroll.navbar.class_list().contains("scrolled"));
        assert_eq!(
            controller.scroll.indicator.style().get_property_value("width"),
            Ok("0%".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn outside_click_closes_the_menu() {
        let controller = fixture_controller();
        controller.wire();
        controller.toggle_menu();
        assert!(controller.menu_is_open());

        let event = MouseEvent::new("click").unwrap();
        let _ = controller.document.dispatch_event(&event);
        assert!(!controller.menu_is_open());

        // Closing again from the closed state is fine.
        let event = MouseEvent::new("click").unwrap();
        let _ = controller.document.dispatch_event(&event);
        assert!(!controller.menu_is_open());
    }

    #[wasm_bindgen_test]
    fn alt_arrow_left_from_the_first_link_stays_put() {
        let controller = fixture_controller();

        let init = KeyboardEventInit::new();
        init.set_key("ArrowLeft");
        init.set_alt_key(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();

        controller.handle_keydown(&event);
        assert_eq!(controller.transition_phase(), Phase::Idle);
    }
}
