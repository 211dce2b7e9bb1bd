/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Coinmaze.

Coinmaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Coinmaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Coinmaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build-time settings.

/// Package name.
pub static PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version.
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version and license notice displayed by `--version`.
pub static COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Log level when the `RUST_LOG` environment variable is not set.
pub static DEFAULT_LOG_LEVEL: &str = "warn";
