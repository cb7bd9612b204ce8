// Copyright (c) 2019 PETA Developers. All Rights Reserved.

pub mod futures;
