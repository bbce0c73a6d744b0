mod rendering;
mod tabs;
