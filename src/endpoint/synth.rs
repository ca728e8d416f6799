use crate::endpoint::args::{EndpointArgs, TiledArgs};
use crate::endpoint::endpoint_model::{EndpointDescriptor, EndpointKind, EndpointPath, QueryParam};
use crate::form::reader::FormSnapshot;

/// Build the image endpoint. Optional parameters are appended only when
/// set, always in the order text, font, seed, random_text.
pub fn make_endpoint(args: &EndpointArgs) -> EndpointDescriptor {
    let mut descriptor = EndpointDescriptor::new(EndpointPath::Image {
        width: args.width.clone(),
        height: args.height.clone(),
        bg: args.bg.clone(),
        fg: args.fg.clone(),
        fmt: args.fmt.clone(),
    });

    if !args.image_text.is_empty() {
        descriptor.push(QueryParam::Text(args.image_text.clone()));
    }
    if !args.font.is_empty() {
        descriptor.push(QueryParam::Font(args.font.clone()));
    }
    if !args.seed.is_empty() {
        descriptor.push(QueryParam::Seed(args.seed.clone()));
    }
    if args.random_text {
        descriptor.push(QueryParam::RandomText);
    }

    descriptor
}

/// Build the tiled endpoint. Each comma-separated color becomes its own
/// `colors` parameter; blank entries are dropped.
pub fn make_tiled_endpoint(args: &TiledArgs) -> EndpointDescriptor {
    let mut descriptor = EndpointDescriptor::new(EndpointPath::Tiled {
        width: args.width.clone(),
        height: args.height.clone(),
        cols: args.cols.clone(),
        rows: args.rows.clone(),
        fmt: args.fmt.clone(),
    });

    for color in args.colors.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        descriptor.push(QueryParam::Colors(color.to_string()));
    }

    descriptor
}

/// Shape-guard the snapshot for the page's endpoint kind, then synthesize.
pub fn synthesize(kind: EndpointKind, snapshot: &FormSnapshot) -> Option<EndpointDescriptor> {
    match kind {
        EndpointKind::Image => EndpointArgs::from_snapshot(snapshot).map(|a| make_endpoint(&a)),
        EndpointKind::Tiled => TiledArgs::from_snapshot(snapshot).map(|a| make_tiled_endpoint(&a)),
    }
}
