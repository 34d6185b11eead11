use std::cell::RefCell;
use std::rc::Rc;

use driftwall_core::{
    column_sets, compute_layout, GalleryAction, GalleryConfig, GalleryState, LayoutMode,
    GALLERY_COLUMNS,
};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::input::{pointer_move_action, touch_move_action, touch_start_action, wheel_action};
use crate::scroll_lock::ScrollLock;
use crate::style;
use crate::viewport;

const ROOT_ID: &str = "gallery-root";

#[derive(Properties)]
pub(crate) struct GalleryProps {
    pub(crate) config: Rc<GalleryConfig>,
}

impl PartialEq for GalleryProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

type Dispatch = Rc<dyn Fn(GalleryAction)>;

fn make_dispatch(
    state: Rc<RefCell<GalleryState>>,
    config: Rc<GalleryConfig>,
    force_update: UseForceUpdateHandle,
) -> Dispatch {
    Rc::new(move |action| {
        let (changed, before, after) = {
            let mut state = state.borrow_mut();
            let before = state.mode();
            let changed = state.apply(action, &config);
            (changed, before, state.mode())
        };
        if before != after {
            console::log!("gallery layout", mode_label(before), "->", mode_label(after));
        }
        if changed {
            force_update.force_update();
        }
    })
}

fn mode_label(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::Desktop => "desktop",
        LayoutMode::Mobile => "mobile",
    }
}

fn blocking_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

fn bind_container(
    element: Element,
    dispatch: Dispatch,
    fallback_height: f64,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let wheel_element = element.clone();
    let wheel_dispatch = dispatch.clone();
    listeners.push(EventListener::new_with_options(
        &element,
        "wheel",
        blocking_options(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            event.prevent_default();
            wheel_dispatch(wheel_action(event, &wheel_element, fallback_height));
        },
    ));

    let move_element = element.clone();
    let move_dispatch = dispatch.clone();
    listeners.push(EventListener::new(&element, "mousemove", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            move_dispatch(pointer_move_action(event, &move_element));
        }
    }));

    let start_element = element.clone();
    let start_dispatch = dispatch.clone();
    listeners.push(EventListener::new(&element, "touchstart", move |event: &Event| {
        let Some(event) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        if let Some(action) = touch_start_action(event, &start_element) {
            start_dispatch(action);
        }
    }));

    let touch_move_element = element.clone();
    let touch_move_dispatch = dispatch.clone();
    listeners.push(EventListener::new_with_options(
        &element,
        "touchmove",
        blocking_options(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            event.prevent_default();
            if let Some(action) = touch_move_action(event, &touch_move_element) {
                touch_move_dispatch(action);
            }
        },
    ));

    for name in ["touchend", "touchcancel"] {
        let end_dispatch = dispatch.clone();
        listeners.push(EventListener::new(&element, name, move |_event: &Event| {
            end_dispatch(GalleryAction::TouchEnd);
        }));
    }

    listeners
}

#[function_component(Gallery)]
pub(crate) fn gallery(props: &GalleryProps) -> Html {
    let config = props.config.clone();
    let container_ref = use_node_ref();
    let force_update = use_force_update();
    let state = use_mut_ref({
        let config = config.clone();
        move || {
            let (width, height) = viewport::viewport_size(config.fallback_viewport_height);
            GalleryState::new(&config, GALLERY_COLUMNS.len(), width, height)
        }
    });

    use_effect_with((), |_| {
        let lock = ScrollLock::acquire();
        move || drop(lock)
    });

    {
        let container_ref = container_ref.clone();
        let state = state.clone();
        let config = config.clone();
        let fallback_height = config.fallback_viewport_height;
        use_effect_with((), move |_| {
            let dispatch = make_dispatch(state, config, force_update);
            let mut listeners = match container_ref.cast::<Element>() {
                Some(element) => bind_container(element, dispatch.clone(), fallback_height),
                None => {
                    console::warn!("gallery: container not mounted, input disabled");
                    Vec::new()
                }
            };
            if let Some(window) = web_sys::window() {
                let resize_window = window.clone();
                listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
                    let (width, height) =
                        viewport::window_size(&resize_window, fallback_height);
                    dispatch(GalleryAction::Resize { width, height });
                }));
            } else {
                console::warn!("gallery: window unavailable, resize tracking disabled");
            }
            move || drop(listeners)
        });
    }

    let layout = {
        let state = state.borrow();
        compute_layout(&state, &config, &column_sets())
    };
    let item_gap = layout.item_gap;
    let tile_style = style::tile_style(layout.image_height);
    let columns = layout.columns.iter().enumerate().map(|(column_index, column)| {
        let tiles = column.items.iter().enumerate().map(|(index, image)| {
            html! {
                <div key={index} class="driftwall-tile" style={tile_style.clone()}>
                    <img
                        src={image.src}
                        alt={image.alt}
                        draggable="false"
                        style={style::IMAGE_STYLE}
                    />
                </div>
            }
        });
        html! {
            <div key={column_index} class="driftwall-column" style={style::COLUMN_STYLE}>
                <div class="driftwall-track" style={style::track_style(column, item_gap)}>
                    { for tiles }
                </div>
            </div>
        }
    });

    html! {
        <div ref={container_ref} class="driftwall" style={style::CONTAINER_STYLE}>
            <div class="driftwall-group" style={style::group_style(&layout)}>
                { for columns }
            </div>
        </div>
    }
}

fn load_config() -> GalleryConfig {
    let config = GalleryConfig::from_catalog();
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            console::error!("gallery: invalid config, using fixed preset", err.to_string());
            GalleryConfig::fixed()
        }
    }
}

pub(crate) fn run() {
    let props = GalleryProps {
        config: Rc::new(load_config()),
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        console::error!("gallery: document unavailable");
        return;
    };
    console::log!("gallery: mounting", GALLERY_COLUMNS.len(), "columns");
    match document.get_element_by_id(ROOT_ID) {
        Some(root) => {
            let _app_handle = yew::Renderer::<Gallery>::with_root_and_props(root, props).render();
        }
        None => {
            let _app_handle = yew::Renderer::<Gallery>::with_props(props).render();
        }
    }
}
