// Copyright (c) 2025 websiftrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod sift_use_case;
