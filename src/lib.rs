/// 键位几何：点、矩形、按键轮廓以及多边形合并
pub mod geometry;

/// 按键定义，键盘按键和鼠标按键共用同一套几何
pub mod key;

/// 键盘布局，负责按键 ID 唯一以及合并、移动等编辑操作
pub mod layout;

/// 按键样式以及按 ID 查找样式
pub mod style;

/// 绘制接口，具体的后端由调用方提供
pub mod render;

/// 输入事件的抽象层，以及当前按下的按键集合
pub mod event_model;

/// TOML 读写
pub mod config;

pub mod error;

pub use error::{ConfigError, GeometryError, LayoutError, MergeError};
pub use geometry::{Boundary, Point, Rect, Winding};
pub use key::{InputCode, KeyDefinition, KeyId, KeyKind, MouseButton};
pub use layout::Layout;

// 几何引擎是整个项目唯一需要动脑子的部分：
// 每个按键都是一个任意的简单多边形，标签画在包围盒中心（整数除法，偏左上，老布局都依赖这个）
// 合并按键时求所有轮廓的并集，结果必须是一个多边形，否则就是非法合并
// 判断两个按键是否相邻也走同一条路：并集只有一块就算相邻，只碰到一个顶点不算

// 所有操作都返回新值，不修改原来的按键，编辑器的撤销/重做可以直接存旧值

// `render` 只定义了 `Surface`，真正的绘制（wayland overlay 之类）不在这个 crate 里
// 样式也是显式传进去的，没有全局状态

// TODO: 合并后的轮廓如果有洞（一圈按键围起来），现在直接当成非法合并；
// 以后 `Boundary` 支持洞的话可以放开
