//! A small three-page application driven end to end.

use std::cell::RefCell;
use std::rc::Rc;

use cape_maestro::{Component, ComponentRegistry, Navigation, Router};
use cape_relief::Params;

/// Stand-in for the container's contents.
type Screen = Rc<RefCell<String>>;

struct Page {
    text: &'static str,
    screen: Screen,
}

impl Component for Page {
    fn mount(&mut self, _container: &str, _params: &Params) {
        *self.screen.borrow_mut() = String::from(self.text);
    }

    fn unmount(&mut self) {
        self.screen.borrow_mut().clear();
    }
}

fn app(screen: &Screen) -> Router {
    let mut registry = ComponentRegistry::new();
    for (identity, text) in [
        ("TopIndex", "Top page"),
        ("AboutIndex", "About page"),
        ("HelpIndex", "Help page"),
    ] {
        let screen = screen.clone();
        registry.register(identity, move || {
            Box::new(Page {
                text,
                screen: screen.clone(),
            })
        });
    }

    let mut router = Router::new(registry);
    router
        .draw(|m| {
            m.root("top#index");
            m.match_route("about", "about#index");
            m.match_route("help", "help#index");
        })
        .unwrap();
    router.mount("main");
    router
}

#[test]
fn navigates_between_pages() {
    let screen = Screen::default();
    let mut router = app(&screen);
    router.verify_components().unwrap();

    router.start().unwrap();
    assert_eq!(screen.borrow().as_str(), "Top page");

    router.navigate("about").unwrap();
    assert_eq!(screen.borrow().as_str(), "About page");

    router.navigate("help").unwrap();
    assert_eq!(screen.borrow().as_str(), "Help page");

    router.navigate("").unwrap();
    assert_eq!(screen.borrow().as_str(), "Top page");

    router.stop();
    assert_eq!(router.trigger().unwrap(), Navigation::Ignored);
    assert_eq!(screen.borrow().as_str(), "Top page");
}

#[test]
fn unknown_page_keeps_screen() {
    let screen = Screen::default();
    let mut router = app(&screen);
    router.start().unwrap();
    router.navigate("about").unwrap();

    let navigation = router.navigate("contact").unwrap();
    assert!(matches!(navigation, Navigation::NoRoute { .. }));
    assert_eq!(screen.borrow().as_str(), "About page");
    assert_eq!(router.params().collection(), Some("about"));
}
