use std::cell::{Cell, RefCell};
use std::rc::Rc;

use veneer_core::{
    Build, ClassSet, Component, Configure, Container, ElementHandle, KEY_ATTRIBUTE, ListenerSlot,
    NativeEvent, Panel, Root, VNode, Widget,
};
use veneer_test_support::{MemoryElement, Registration, element_for, element_tree_for, mounted};

#[derive(Debug)]
struct Tapped;

impl From<NativeEvent> for Tapped {
    fn from(_event: NativeEvent) -> Self {
        Self
    }
}

struct Card {
    panel: Panel,
    on_tap: ListenerSlot<Tapped>,
    inserts: Rc<Cell<u32>>,
    destroys: Rc<Cell<u32>>,
}

impl Card {
    fn new(classes: ClassSet) -> Self {
        Self {
            panel: Panel::new(classes),
            on_tap: ListenerSlot::new("tap"),
            inserts: Rc::new(Cell::new(0)),
            destroys: Rc::new(Cell::new(0)),
        }
    }

    fn on_tap(&mut self, callback: impl Fn(Tapped) + 'static) {
        let element = self.panel.widget().element().cloned();
        self.on_tap.set(callback, element.as_ref());
    }

    fn on_tap_clear(&mut self) {
        let element = self.panel.widget().element().cloned();
        self.on_tap.clear(element.as_ref());
    }
}

impl Component for Card {
    fn widget(&self) -> &Widget {
        self.panel.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.panel.widget_mut()
    }

    fn render(&self) -> VNode {
        self.panel.render_tag("x-card")
    }

    fn children(&self) -> &[Box<dyn Component>] {
        self.panel.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        self.panel.children_mut()
    }

    fn after_insert(&mut self, element: &ElementHandle) {
        self.inserts.set(self.inserts.get() + 1);
        self.on_tap.register(element);
    }

    fn after_destroy(&mut self) {
        self.destroys.set(self.destroys.get() + 1);
    }
}

impl Container for Card {
    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }
}

fn card<'a, P: Container>(parent: &'a mut P, build: Build<'_, Card>) -> &'a mut Card {
    build.attach(parent, Card::new)
}

#[test]
fn initializer_runs_once_before_builder_returns() {
    let mut root = Root::default();
    let calls = Cell::new(0);
    let built = card(
        &mut root,
        Build::new().init(|card: &mut Card| {
            calls.set(calls.get() + 1);
            card.widget_mut().classes_mut().insert("configured");
        }),
    );
    assert!(built.widget().classes().contains("configured"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn builder_appends_in_order_and_resolves_classes() {
    let mut root = Root::default();
    card(&mut root, Build::new().class_name("first"));
    card(
        &mut root,
        Build::new().classes(["second", "extra"]).class_name("ignored"),
    );
    let before = root.panel().len();
    card(&mut root, Build::new());
    assert_eq!(root.panel().len(), before + 1);

    let classes: Vec<String> = (0..3)
        .filter_map(|index| root.panel().child::<Card>(index))
        .map(|card| card.widget().classes().to_string())
        .collect();
    assert_eq!(classes, vec!["first", "second extra", ""]);
}

#[test]
fn configure_runs_init_on_owned_value() {
    let card = Card::new(ClassSet::new()).configure(|card| {
        card.widget_mut().classes_mut().insert("ready");
    });
    assert!(card.widget().classes().contains("ready"));
}

#[test]
fn render_is_stable_without_mutation() {
    let mut root = Root::default();
    card(
        &mut root,
        Build::new().init(|outer: &mut Card| {
            card(outer, Build::new().class_name("inner"));
        }),
    );
    assert_eq!(root.render(), root.render());
}

#[test]
fn listener_set_before_mount_registers_once_on_mount() {
    let mut root = Root::default();
    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);
    card(&mut root, Build::new()).on_tap(move |_| counter.set(counter.get() + 1));

    let element = mounted(&mut root);
    let card_element = element.child(0);
    assert_eq!(
        card_element.as_ref().map(|el| el.registration_count("tap")),
        Some(1)
    );
    assert_eq!(
        card_element.map(|el| el.dispatch(NativeEvent::new("tap"))),
        Some(true)
    );
    assert_eq!(taps.get(), 1);

    // A second walk over the same elements is not a new mount.
    root.mount(&element.handle());
    assert_eq!(
        element.child(0).map(|el| el.registration_count("tap")),
        Some(1)
    );
}

#[test]
fn listener_set_after_mount_registers_immediately() {
    let mut root = Root::default();
    card(&mut root, Build::new());
    let element = mounted(&mut root);
    let card_element = element.child(0);
    assert_eq!(
        card_element.as_ref().map(|el| el.has_handler("tap")),
        Some(false)
    );

    if let Some(card) = root.panel_mut().child_mut::<Card>(0) {
        card.on_tap(|_| {});
    }
    assert_eq!(card_element.map(|el| el.has_handler("tap")), Some(true));
}

#[test]
fn clearing_after_mount_stops_forwarding() {
    let mut root = Root::default();
    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);
    card(&mut root, Build::new()).on_tap(move |_| counter.set(counter.get() + 1));
    let element = mounted(&mut root);

    if let Some(card) = root.panel_mut().child_mut::<Card>(0) {
        card.on_tap_clear();
    }
    let card_element = element.child(0);
    assert_eq!(
        card_element.as_ref().map(|el| el.dispatch(NativeEvent::new("tap"))),
        Some(false)
    );
    assert_eq!(taps.get(), 0);
    assert_eq!(
        card_element.map(|el| el.registrations()),
        Some(vec![
            Registration::Set("tap".into()),
            Registration::Cleared("tap".into()),
        ])
    );
}

#[test]
fn replaced_element_triggers_remount() {
    let mut root = Root::default();
    let inserts = Rc::new(RefCell::new(None));
    let seen = Rc::clone(&inserts);
    card(
        &mut root,
        Build::new().init(move |card: &mut Card| {
            *seen.borrow_mut() = Some((Rc::clone(&card.inserts), Rc::clone(&card.destroys)));
        }),
    )
    .on_tap(|_| {});
    let Some((insert_count, destroy_count)) = inserts.borrow_mut().take() else {
        panic!("initializer did not run");
    };

    mounted(&mut root);
    let fresh = element_tree_for(&root.render());
    root.mount(&fresh.handle());

    assert_eq!(insert_count.get(), 2);
    assert_eq!(destroy_count.get(), 1);
    assert_eq!(
        fresh.child(0).map(|el| el.registration_count("tap")),
        Some(1)
    );
}

#[test]
fn removal_tears_down_subtree() {
    let mut root = Root::default();
    let outer = card(
        &mut root,
        Build::new().init(|outer: &mut Card| {
            card(outer, Build::new());
        }),
    );
    let outer_destroys = Rc::clone(&outer.destroys);
    let inner_destroys = outer
        .panel()
        .child::<Card>(0)
        .map(|inner| Rc::clone(&inner.destroys));
    mounted(&mut root);

    let removed = root.panel_mut().remove(0);
    assert!(removed.is_some_and(|card| !card.widget().lifecycle().is_mounted()));
    assert_eq!(outer_destroys.get(), 1);
    assert_eq!(inner_destroys.map(|count| count.get()), Some(1));
    assert!(root.panel().is_empty());
}

#[test]
fn remove_all_tears_down_every_child() {
    let mut root = Root::default();
    card(&mut root, Build::new());
    card(&mut root, Build::new());
    mounted(&mut root);

    let removed = root.panel_mut().remove_all();
    assert_eq!(removed.len(), 2);
    assert!(
        removed
            .iter()
            .all(|card| !card.widget().lifecycle().is_mounted())
    );
}

#[test]
fn keyed_element_with_another_tag_is_not_mounted() {
    let mut root = Root::default();
    card(&mut root, Build::new()).on_tap(|_| {});
    let rendered = root.render();
    let impostor = MemoryElement::new("span");
    if let Some(key) = rendered.children[0].key {
        impostor.set_attribute(KEY_ATTRIBUTE, key.to_string());
    }
    let root_element = element_for(&rendered);
    root_element.append_child(Rc::clone(&impostor));

    root.mount(&root_element.handle());

    assert!(impostor.registrations().is_empty());
    assert!(
        root.panel()
            .child::<Card>(0)
            .is_some_and(|card| !card.widget().lifecycle().is_mounted())
    );
}

#[test]
fn child_found_through_unkeyed_wrappers_and_missing_child_stays_unmounted() {
    let mut root = Root::default();
    card(&mut root, Build::new()).on_tap(|_| {});
    card(&mut root, Build::new());
    let rendered = root.render();
    let first = element_for(&rendered.children[0]);
    let wrapper = MemoryElement::with_children("div", vec![Rc::clone(&first)]);
    let root_element = element_for(&rendered);
    root_element.append_child(wrapper);

    root.mount(&root_element.handle());

    assert_eq!(first.registration_count("tap"), 1);
    let mounted_flags: Vec<bool> = (0..2)
        .filter_map(|index| root.panel().child::<Card>(index))
        .map(|card| card.widget().lifecycle().is_mounted())
        .collect();
    assert_eq!(mounted_flags, vec![true, false]);
}

#[test]
fn element_of_another_component_is_not_entered() {
    let mut root = Root::default();
    card(
        &mut root,
        Build::new().init(|outer: &mut Card| {
            card(outer, Build::new());
        }),
    );
    card(&mut root, Build::new()).on_tap(|_| {});
    let rendered = root.render();
    // The second card's element is misplaced inside the first card's element.
    let outer = element_tree_for(&rendered.children[0]);
    let second = element_for(&rendered.children[1]);
    outer.append_child(Rc::clone(&second));
    let root_element = element_for(&rendered);
    root_element.append_child(outer);

    root.mount(&root_element.handle());

    assert!(second.registrations().is_empty());
}
