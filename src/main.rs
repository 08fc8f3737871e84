// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Strip Picker: replay a scripted pick session against a scene file

fn main() -> anyhow::Result<()> {
    strip_picker::run()
}
