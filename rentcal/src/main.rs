// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    rentcal_cli::run().await
}
