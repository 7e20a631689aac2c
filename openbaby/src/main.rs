// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Open Baby - track feeds, diaper changes and pump sessions from the terminal

use std::error::Error;

use openbaby_cli::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run().await
}
