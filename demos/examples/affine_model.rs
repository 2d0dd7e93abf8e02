// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model matrices.
//!
//! Place a unit quad as a rotated edge and as a glyph, then project its corners to NDC.
//!
//! Run:
//! - `cargo run -p understory_demos --example affine_model`

use kurbo::{Point, Size};
use understory_affine::{Mat4, model};

fn main() {
    let projection = Mat4::ortho(800.0, 600.0);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];

    // A 100 px edge, 2 px thick, tilted 30 degrees around its center.
    let edge = model(Point::new(350.0, 299.0), Size::new(100.0, 2.0), 30.0, true);
    // A 12 x 20 glyph with its top-left corner at (10, 10).
    let glyph = model(Point::new(10.0, 10.0), Size::new(12.0, 20.0), 0.0, true);

    for (name, m) in [("edge", edge), ("glyph", glyph)] {
        println!("{name}:");
        for corner in corners {
            let px = m * corner;
            let ndc = projection * px;
            println!(
                "  {corner:?} -> px ({:.2}, {:.2}) -> ndc ({:.3}, {:.3})",
                px.x, px.y, ndc.x, ndc.y
            );
        }
        println!("  u_model = {:?}", m.to_row_major());
    }
}
