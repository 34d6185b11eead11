use driftwall_core::input::{page_height, wheel_delta_px, ContainerRect};
use driftwall_core::GalleryAction;
use web_sys::{Element, MouseEvent, TouchEvent, WheelEvent};

pub(crate) trait HasClientRect {
    fn client_bounds(&self) -> ContainerRect;
}

impl HasClientRect for Element {
    fn client_bounds(&self) -> ContainerRect {
        let rect = self.get_bounding_client_rect();
        ContainerRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

pub(crate) fn container_rect(element: &impl HasClientRect) -> Option<ContainerRect> {
    Some(element.client_bounds()).filter(ContainerRect::is_usable)
}

pub(crate) fn wheel_action(
    event: &WheelEvent,
    element: &impl HasClientRect,
    fallback_page_height: f64,
) -> GalleryAction {
    wheel_action_at(
        event.client_x() as f64,
        event.delta_y(),
        event.delta_mode(),
        element,
        fallback_page_height,
    )
}

fn wheel_action_at(
    client_x: f64,
    delta_y: f64,
    delta_mode: u32,
    element: &impl HasClientRect,
    fallback_page_height: f64,
) -> GalleryAction {
    let rect = container_rect(element);
    GalleryAction::Wheel {
        client_x,
        delta_y: wheel_delta_px(delta_y, delta_mode, page_height(rect, fallback_page_height)),
        rect,
    }
}

pub(crate) fn pointer_move_action(
    event: &MouseEvent,
    element: &impl HasClientRect,
) -> GalleryAction {
    GalleryAction::PointerMove {
        client_x: event.client_x() as f64,
        rect: container_rect(element),
    }
}

pub(crate) fn touch_start_action(
    event: &TouchEvent,
    element: &impl HasClientRect,
) -> Option<GalleryAction> {
    let (client_x, client_y) = first_touch(event)?;
    Some(GalleryAction::TouchStart {
        client_x,
        client_y,
        rect: container_rect(element),
    })
}

pub(crate) fn touch_move_action(
    event: &TouchEvent,
    element: &impl HasClientRect,
) -> Option<GalleryAction> {
    let (client_x, client_y) = first_touch(event)?;
    Some(GalleryAction::TouchMove {
        client_x,
        client_y,
        rect: container_rect(element),
    })
}

fn first_touch(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().item(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}
