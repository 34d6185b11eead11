use crate::input::ContainerRect;

/// Input already translated out of the DOM. Coordinates are client pixels;
/// `delta_y` is in pixels after `deltaMode` normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryAction {
    Wheel {
        client_x: f64,
        delta_y: f64,
        rect: Option<ContainerRect>,
    },
    PointerMove {
        client_x: f64,
        rect: Option<ContainerRect>,
    },
    TouchStart {
        client_x: f64,
        client_y: f64,
        rect: Option<ContainerRect>,
    },
    TouchMove {
        client_x: f64,
        client_y: f64,
        rect: Option<ContainerRect>,
    },
    TouchEnd,
    Resize {
        width: f64,
        height: f64,
    },
}
