//! Yew component hosting a Veneer tree.
//!
//! The host renders the tree inside a wrapper `div` and, after every yew
//! render, walks the produced DOM so components receive their elements.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use veneer_core::{Component as _, MountError, Root};
use web_sys::Element;
use yew::{AppHandle, Context, Html, NodeRef, Properties, html};

use crate::dom::DomElement;
use crate::html::to_html;

/// Tree shared between the host and application code that mutates it.
pub type SharedTree = Rc<RefCell<Root>>;

/// Properties of [`Host`].
#[derive(Clone, Properties)]
pub struct HostProps {
    /// Tree rendered by the host.
    pub tree: SharedTree,
}

impl PartialEq for HostProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree)
    }
}

/// Messages accepted by [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMsg {
    /// Re-render after the tree was changed outside of yew.
    Refresh,
}

/// Yew component rendering a [`SharedTree`].
pub struct Host {
    node_ref: NodeRef,
}

impl yew::Component for Host {
    type Message = HostMsg;
    type Properties = HostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HostMsg::Refresh => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let tree = to_html(ctx.props().tree.borrow().render());
        html! {
            <div class="veneer-host" ref={self.node_ref.clone()}>
                { tree }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        let mut root = ctx.props().tree.borrow_mut();
        let rendered = self
            .node_ref
            .cast::<Element>()
            .and_then(|host| host.first_element_child());
        let Some(element) = rendered else {
            let err = MountError::RenderedRootMissing {
                id: root.id().to_string(),
            };
            warn!(error = %err, "component tree not mounted");
            return;
        };
        root.mount(&DomElement::from_element(element));
        debug!(first_render, id = root.id(), "component tree mounted");
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        ctx.props().tree.borrow_mut().unmount();
    }
}

/// Renders `tree` into the document element whose id is the root's id.
///
/// # Errors
///
/// Returns [`MountError::RootElementMissing`] when the document has no such
/// element.
pub fn start(tree: SharedTree) -> Result<AppHandle<Host>, MountError> {
    console_error_panic_hook::set_once();
    let id = tree.borrow().id().to_string();
    let Some(host) = gloo::utils::document().get_element_by_id(&id) else {
        return Err(MountError::RootElementMissing { id });
    };
    debug!(%id, "starting yew host");
    Ok(yew::Renderer::<Host>::with_root_and_props(host, HostProps { tree }).render())
}
