// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod avatar;
mod feature_list;
mod identity;
mod illustrated_header_page_layout;
mod linear_gradient;

pub use feature_list::{FeatureItem, FeatureList, MenuItem};
pub use identity::{IdentityHeader, IdentityOverlay};
pub use illustrated_header_page_layout::IllustratedHeaderPageLayout;
pub use linear_gradient::LinearGradient;
