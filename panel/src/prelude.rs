pub use crate::{
    App, Component, Html, Layout, Location, RouteContext, Routes, View, escape, outlet,
};
